fn essence(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .unwrap_or(content_type)
        .trim()
}

pub fn is_video(content_type: &str) -> bool {
    essence(content_type).starts_with("video/")
}

pub fn content_type_to_extension(content_type: &str) -> &'static str {
    match essence(content_type) {
        "video/mp4" | "video/x-m4v" => "mp4",
        "video/webm" => "webm",
        "video/quicktime" => "mov",
        "video/x-msvideo" | "video/avi" | "video/msvideo" => "avi",
        "video/x-matroska" => "mkv",
        "video/mpeg" => "mpeg",
        "video/ogg" => "ogv",
        "video/3gpp" => "3gp",
        _ => "mp4",
    }
}
