//! Media sources, read from current `media-source` records and from the
//! legacy `track` records older browsers still return.

pub mod audio_source;
pub mod media_source;
pub mod video_source;

/// Fields only a video source reports. Used to tell the two apart when a
/// record carries no `kind`.
pub(crate) const VIDEO_ONLY_FIELDS: [&str; 7] = [
    "frameWidth",
    "frameHeight",
    "width",
    "height",
    "framesPerSecond",
    "framesSent",
    "framesDecoded",
];
