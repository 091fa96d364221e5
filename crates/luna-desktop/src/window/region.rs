//! Pointer hit regions on a window frame

/// Where a pointer-down landed on a window frame
///
/// The rendering layer does the hit testing and reports the region; the
/// engine decides which gesture (if any) starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowRegion {
    /// The title bar strip
    TitleBar,
    /// Frame padding that is neither title bar nor content
    FrameBackground,
    /// The content area (interactive children)
    Content,
    /// Bottom-right resize grip
    ResizeHandle,
    /// Minimize button in the title bar
    MinimizeButton,
    /// Maximize/restore button in the title bar
    MaximizeButton,
    /// Close button in the title bar
    CloseButton,
}

impl WindowRegion {
    /// Parse from string ID (e.g., "titlebar", "resize", "close")
    pub fn from_id(id: &str) -> Option<Self> {
        match id.to_lowercase().as_str() {
            "titlebar" => Some(WindowRegion::TitleBar),
            "frame" => Some(WindowRegion::FrameBackground),
            "content" => Some(WindowRegion::Content),
            "resize" => Some(WindowRegion::ResizeHandle),
            "minimize" => Some(WindowRegion::MinimizeButton),
            "maximize" => Some(WindowRegion::MaximizeButton),
            "close" => Some(WindowRegion::CloseButton),
            _ => None,
        }
    }
}
