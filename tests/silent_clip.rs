//! End-to-end coverage of the audio path: the generated clip must be
//! readable back with the format it was written with and must stream
//! completely through the chunk reader. None of this needs libvosk.

use tempfile::TempDir;
use voskcheck::audio::{ClipReader, clip_spec, validate_spec, write_silent_clip};
use voskcheck::defaults::{CHUNK_SAMPLES, CLIP_FRAMES};

#[test]
fn generated_clip_passes_the_recognition_preconditions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("clip.wav");

    write_silent_clip(&path).unwrap();

    let reader = ClipReader::open(&path).unwrap();
    validate_spec(&reader.spec()).unwrap();
    assert_eq!(reader.spec(), clip_spec());
    assert_eq!(reader.frames(), CLIP_FRAMES);
}

#[test]
fn generated_clip_streams_fully_in_fixed_chunks() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("clip.wav");

    write_silent_clip(&path).unwrap();

    let mut reader = ClipReader::open(&path).unwrap();
    let mut chunks = 0usize;
    let mut total = 0usize;
    loop {
        let chunk = reader.next_chunk().unwrap();
        if chunk.is_empty() {
            break;
        }
        assert!(chunk.len() <= CHUNK_SAMPLES);
        assert!(chunk.iter().all(|&s| s == 0), "silence must stay silent");
        chunks += 1;
        total += chunk.len();
    }

    assert_eq!(total, CLIP_FRAMES as usize);
    assert_eq!(chunks, CLIP_FRAMES as usize / CHUNK_SAMPLES);
}

#[test]
fn clip_can_be_regenerated_over_an_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("clip.wav");

    write_silent_clip(&path).unwrap();
    write_silent_clip(&path).unwrap();

    let reader = ClipReader::open(&path).unwrap();
    assert_eq!(reader.frames(), CLIP_FRAMES);
}
