//! Local storage adapters.

mod file_transcript;

pub use file_transcript::FileTranscriptMirror;
