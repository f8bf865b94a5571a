pub const TITLE: &str = "QR Code Generator";
pub const TAGLINE: &str = "Turn any text into a QR code instantly";
pub const INPUT_TITLE: &str = " Text or URL ";
pub const INPUT_PLACEHOLDER: &str = "Enter text or a URL...";
pub const GENERATING_MARKER: &str = " ✦ generating ";
pub const QR_PLACEHOLDER: &str = "Your QR code will appear here";
pub const DOWNLOAD_HINT: &str = "[Ctrl+S] Download";
pub const FOOTER_HINT: &str = "Esc quit · Ctrl+U clear · works offline";
pub const QUERY_DISPLAY_CHARS: usize = 40;
