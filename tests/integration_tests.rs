//! Integration tests for notefont
//!
//! Exercises the full path from files on disk (WAV font, asset manifest,
//! session YAML) to the clips handed to a playback backend.

use notefont::player::{FontNotePlayer, NotePlayer, RecordingBackend};
use notefont::{
    chromatic_distance, AssetManifest, Chroma, Note, NoteFontError, NoteSequence,
    PatternNoteSequence, SessionConfig, TraversalPolicy,
};
use std::fs;
use std::path::Path;

const SAMPLE_RATE: u32 = 8000;

/// Write a mono 16-bit WAV of `ms` milliseconds.
fn write_font(path: &Path, ms: u32) {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).unwrap();
    for i in 0..(SAMPLE_RATE * ms / 1000) {
        writer.write_sample(((i % 64) as i16 - 32) * 256).unwrap();
    }
    writer.finalize().unwrap();
}

fn note(token: &str) -> Note {
    Note::parse(token).unwrap()
}

#[test]
fn test_load_font_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("piano.wav");
    write_font(&path, 2400);

    let backend = RecordingBackend::new();
    let player = FontNotePlayer::load(&path, 100, note("C4"), note("B5"), &backend).unwrap();

    let expected = chromatic_distance(&note("C4"), &note("B5")) + 1;
    assert_eq!(player.sprites().len() as i32, expected);
    for (i, (_, sprite)) in player.sprites().iter().enumerate() {
        assert_eq!(sprite.start_ms, i as u64 * 100);
        assert_eq!(sprite.length_ms, 100);
    }

    let sprite = player.sprites().get("Gb4").unwrap();
    assert_eq!(player.asset().clip(sprite).len(), (SAMPLE_RATE / 10) as usize);

    player.play_note(Chroma::Gb, 4);
    player.play_note(Chroma::C, 7);
    assert_eq!(backend.played(), vec!["Gb4"]);
}

#[test]
fn test_undecodable_font_is_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.wav");
    fs::write(&path, b"RIFF but not really").unwrap();

    let result = FontNotePlayer::load(&path, 100, note("C4"), note("B5"), RecordingBackend::new());
    assert!(matches!(result, Err(NoteFontError::LoadError { .. })));

    let missing = dir.path().join("missing.wav");
    let result = FontNotePlayer::load(&missing, 100, note("C4"), note("B5"), RecordingBackend::new());
    assert!(matches!(result, Err(NoteFontError::LoadError { .. })));
}

#[test]
fn test_session_with_manifest_font() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("assets/sfx/fonts")).unwrap();
    fs::create_dir_all(dir.path().join("assets/meta")).unwrap();
    write_font(&dir.path().join("assets/sfx/fonts/marimba.wav"), 1200);

    fs::write(
        dir.path().join("assets/meta/sfx.json"),
        r#"[{ "path": "./assets/sfx/fonts/marimba.wav", "name": "marimba" }]"#,
    )
    .unwrap();

    let session_path = dir.path().join("session.yaml");
    fs::write(
        &session_path,
        r#"
instrument:
  font: marimba
  manifest: assets/meta/sfx.json
  clip-length-ms: 100
  start: C5
  end: B5
sequence:
  kind: pattern
  policy: alternating
  notes: [C5, E5, G5, B5]
launches: 7
"#,
    )
    .unwrap();

    let session = SessionConfig::load(&session_path).unwrap();
    let manifest = AssetManifest::load(dir.path().join("assets/meta/sfx.json")).unwrap();
    assert_eq!(manifest.names().collect::<Vec<_>>(), vec!["marimba"]);

    let backend = RecordingBackend::new();
    let player = session.load_player(&backend).unwrap();
    assert_eq!(player.sprites().len(), 12);

    let mut seq = session.sequence.build(&player).unwrap();
    for _ in 0..session.launches {
        seq.play_note();
    }
    assert_eq!(
        backend.played(),
        vec!["C5", "E5", "G5", "B5", "G5", "E5", "C5"]
    );
}

#[test]
fn test_session_font_missing_from_manifest() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("sfx.json"), "[]").unwrap();
    let session_path = dir.path().join("session.yaml");
    fs::write(
        &session_path,
        "instrument: {font: harp, manifest: sfx.json, clip-length-ms: 100, start: C5, end: B5}\nsequence: {notes: [C5]}",
    )
    .unwrap();

    let session = SessionConfig::load(&session_path).unwrap();
    let result = session.load_player(RecordingBackend::new());
    assert!(matches!(result, Err(NoteFontError::ConfigError(_))));
}

#[test]
fn test_two_instruments_two_sequences() {
    let dir = tempfile::tempdir().unwrap();
    let low_path = dir.path().join("low.wav");
    let high_path = dir.path().join("high.wav");
    write_font(&low_path, 1200);
    write_font(&high_path, 1200);

    let low_backend = RecordingBackend::new();
    let high_backend = RecordingBackend::new();
    let low = FontNotePlayer::load(&low_path, 100, note("C3"), note("B3"), &low_backend).unwrap();
    let high = FontNotePlayer::load(&high_path, 100, note("C6"), note("B6"), &high_backend).unwrap();

    let mut bass =
        PatternNoteSequence::parse_pattern(&low, &["C3", "G3"], TraversalPolicy::Ascending).unwrap();
    let mut bells = PatternNoteSequence::parse_pattern(
        &high,
        &["C6", "D6", "E6"],
        TraversalPolicy::Descending,
    )
    .unwrap();

    for _ in 0..3 {
        bass.play_note();
        bells.play_note();
    }
    assert_eq!(low_backend.played(), vec!["C3", "G3", "C3"]);
    assert_eq!(high_backend.played(), vec!["E6", "D6", "C6"]);
}
