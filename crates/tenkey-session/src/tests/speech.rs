use super::{make_session, press_at, RecordingPlayer};
use crate::KeyEvent;

#[test]
fn test_press_requests_latest_char() {
    let mut s = make_session();
    press_at(&mut s, 'k', &[0]);
    assert_eq!(s.pending_speech(), Some("かー"));
    press_at(&mut s, 'k', &[200]);
    assert_eq!(s.pending_speech(), Some("きー"));
}

#[test]
fn test_tick_hands_off_only_latest() {
    let mut s = make_session();
    let mut player = RecordingPlayer::default();
    press_at(&mut s, 'a', &[0, 100, 200]);
    assert_eq!(s.speech_tick(&mut player).as_deref(), Some("うー"));
    assert_eq!(player.spoken, vec!["うー"]);
    assert_eq!(s.speech_tick(&mut player), None);
}

#[test]
fn test_tick_waits_for_player() {
    let mut s = make_session();
    let mut player = RecordingPlayer {
        speaking: true,
        ..Default::default()
    };
    press_at(&mut s, 'm', &[0]);
    assert_eq!(s.speech_tick(&mut player), None);
    press_at(&mut s, 'm', &[100]);
    player.speaking = false;
    assert_eq!(s.speech_tick(&mut player).as_deref(), Some("みー"));
    assert_eq!(player.spoken, vec!["みー"]);
}

#[test]
fn test_unresolvable_run_not_spoken() {
    let mut s = make_session();
    press_at(&mut s, 'a', &[0]);
    press_at(&mut s, 'k', &[100, 200, 300, 400, 500, 600]);
    assert_eq!(s.pending_speech(), Some("あー"));

    s.handle_key(KeyEvent::AnnounceAll, 700);
    assert_eq!(s.pending_speech(), Some("あ"));
}

#[test]
fn test_announce_all_speaks_best_text() {
    let mut s = make_session();
    press_at(&mut s, 'k', &[0, 500, 3_500, 3_900]);
    press_at(&mut s, 's', &[4_100]);
    let resp = s.handle_key(KeyEvent::AnnounceAll, 4_300);
    assert!(resp.consumed);
    assert_eq!(s.pending_speech(), Some("ききさ"));
}

#[test]
fn test_announce_all_when_empty() {
    let mut s = make_session();
    s.handle_key(KeyEvent::AnnounceAll, 0);
    assert_eq!(s.pending_speech(), Some("文字がないです"));
}

#[test]
fn test_interval_from_settings() {
    let s = make_session();
    assert_eq!(s.speech_interval_ms(), 250);
}
