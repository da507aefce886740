//! Property tests for the codec and merge guarantees

mod codec_roundtrip;
