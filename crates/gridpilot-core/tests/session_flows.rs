//! End-to-end session scenarios over in-memory duplex streams.
//!
//! Each test scripts a robot as raw client bytes, runs the supervisor
//! (or the protocol driver when the outcome matters more than the
//! wire), and asserts the exact byte sequence the server produced.

use std::net::SocketAddr;

use gridpilot_core::{drive, serve_robot, RobotLink, SessionError};
use gridpilot_proto::wire;
use tokio::io::{duplex, AsyncReadExt, AsyncWriteExt};

fn peer() -> SocketAddr {
    "198.51.100.7:4321".parse().unwrap()
}

/// Join message payloads with the wire terminator.
fn script(parts: &[&str]) -> Vec<u8> {
    let mut bytes = Vec::new();
    for part in parts {
        bytes.extend_from_slice(part.as_bytes());
        bytes.extend_from_slice(b"\x07\x08");
    }
    bytes
}

/// Run the supervisor against a pre-seeded client script and collect
/// everything the server put on the wire.
async fn serve_scripted(client_bytes: &[u8]) -> Vec<u8> {
    let (server, mut client) = duplex(4096);
    client.write_all(client_bytes).await.unwrap();

    serve_robot(server, peer()).await;

    let mut sent = Vec::new();
    client.read_to_end(&mut sent).await.unwrap();
    sent
}

#[tokio::test]
async fn completed_session_emits_the_full_exchange() {
    // Handshake per the reference vector, then a short pickup run:
    // discovered facing RIGHT at (3,0), rotated around to LEFT, three
    // steps west to the origin.
    let robot = script(&[
        "Mnau", "1", "35299", // handshake
        "OK 2 0", // turn right (discovery)
        "OK 3 0", // first step
        "OK 3 0", "OK 3 0", // align: two clockwise turns
        "OK 2 0", "OK 1 0", "OK 0 0", // three steps west
        "Tajemstvi u mrize", // secret
    ]);

    let sent = serve_scripted(&robot).await;

    let expected: Vec<u8> = [
        wire::KEY_REQUEST,
        b"37965\x07\x08".as_slice(),
        wire::OK,
        wire::TURN_RIGHT,
        wire::MOVE,
        wire::TURN_RIGHT,
        wire::TURN_RIGHT,
        wire::MOVE,
        wire::MOVE,
        wire::MOVE,
        wire::GET_MESSAGE,
        wire::LOGOUT,
    ]
    .concat();
    assert_eq!(sent, expected);
}

#[tokio::test]
async fn key_out_of_range_is_answered_with_303() {
    let sent = serve_scripted(&script(&["Robot", "5"])).await;

    let expected: Vec<u8> = [wire::KEY_REQUEST, wire::KEY_OUT_OF_RANGE].concat();
    assert_eq!(sent, expected);
}

#[tokio::test]
async fn login_mismatch_is_answered_with_300() {
    let sent = serve_scripted(&script(&["Mnau", "1", "35300"])).await;

    let expected: Vec<u8> =
        [wire::KEY_REQUEST, b"37965\x07\x08".as_slice(), wire::LOGIN_FAILED].concat();
    assert_eq!(sent, expected);
}

#[tokio::test]
async fn overlong_username_is_answered_with_301() {
    // 25 bytes and no terminator in sight: rejected from the buffered
    // bytes alone, before authentication produced any traffic.
    let sent = serve_scripted(&[b'a'; 25]).await;
    assert_eq!(sent, wire::SYNTAX_ERROR);
}

#[tokio::test]
async fn unsolicited_full_power_is_answered_with_302() {
    let robot = script(&["Mnau", "1", "35299", "FULL POWER"]);
    let sent = serve_scripted(&robot).await;

    let expected: Vec<u8> = [
        wire::KEY_REQUEST,
        b"37965\x07\x08".as_slice(),
        wire::OK,
        wire::TURN_RIGHT,
        wire::LOGIC_ERROR,
    ]
    .concat();
    assert_eq!(sent, expected);
}

#[tokio::test]
async fn recharge_interlude_does_not_disturb_navigation() {
    // The robot recharges between the first turn and its reply to MOVE;
    // the position report afterwards is consumed as if nothing happened.
    let robot = script(&[
        "Mnau", "1", "35299",
        "OK -1 0", // turn right (discovery)
        "RECHARGING", "FULL POWER",
        "OK 0 0", // first step lands on the origin
        "Klic pod rohozkou",
    ]);

    let sent = serve_scripted(&robot).await;

    let expected: Vec<u8> = [
        wire::KEY_REQUEST,
        b"37965\x07\x08".as_slice(),
        wire::OK,
        wire::TURN_RIGHT,
        wire::MOVE,
        wire::GET_MESSAGE,
        wire::LOGOUT,
    ]
    .concat();
    assert_eq!(sent, expected);
}

#[tokio::test]
async fn bytes_past_the_confirmation_survive_the_phase_handoff() {
    // The whole session arrives as one TCP segment; navigation replies
    // start landing in the inbox while authentication is still reading.
    // Losing a byte in the auth-to-navigation handoff would
    // desynchronize the run and fail it.
    let robot = script(&[
        "Mnau", "1", "35299", "OK -1 0", "RECHARGING", "FULL POWER", "OK 0 0", "Jezek v kleci",
    ]);
    let navigation_tail = script(&[
        "OK -1 0", "RECHARGING", "FULL POWER", "OK 0 0", "Jezek v kleci",
    ]);

    let (server, mut client) = duplex(4096);
    client.write_all(&robot).await.unwrap();

    let mut link = RobotLink::new(server);
    let identity = gridpilot_core::authenticate(&mut link).await.unwrap();
    assert_eq!(identity.username, "Mnau");

    // Whatever over-read happened during the handshake is queued for
    // the pilot, byte for byte.
    assert!(!link.residual().is_empty());
    assert!(navigation_tail.starts_with(link.residual()));

    let secret = gridpilot_core::Navigator::new(&mut link).run().await.unwrap();
    assert_eq!(secret, "Jezek v kleci");
}

#[tokio::test(start_paused = true)]
async fn forever_blocked_robot_ends_in_timeout() {
    // Every reply reports the same cell. The pilot keeps maneuvering
    // until the script runs dry, then the next read hits its deadline:
    // the protocol has no graceful "stuck" state.
    let mut parts = vec!["Mnau", "1", "35299"];
    parts.extend(std::iter::repeat_n("OK 5 5", 24));
    let robot = script(&parts);

    let (server, mut client) = duplex(4096);
    client.write_all(&robot).await.unwrap();

    let mut link = RobotLink::new(server);
    let outcome = drive(&mut link).await;
    assert!(matches!(outcome, Err(SessionError::Timeout)));

    // The client end stayed open the whole time; only the deadline, not
    // a disconnect, ended the session.
    drop(link);
    let mut sent = Vec::new();
    client.read_to_end(&mut sent).await.unwrap();
    assert!(sent.ends_with(wire::MOVE) || sent.ends_with(wire::TURN_RIGHT) || sent.ends_with(wire::TURN_LEFT));
}

#[tokio::test(start_paused = true)]
async fn half_open_peer_gets_no_reply() {
    let (server, client) = duplex(4096);
    drop(client);

    // Disconnected maps to no wire response; nothing to read and no
    // panic is the whole assertion.
    serve_robot(server, peer()).await;
}

#[tokio::test]
async fn username_arriving_byte_by_byte_is_assembled() {
    let (server, mut client) = duplex(4096);

    let writer = tokio::spawn(async move {
        for chunk in [&b"Mn"[..], b"au", b"\x07", b"\x08", b"1\x07\x08", b"35299\x07\x08"] {
            client.write_all(chunk).await.unwrap();
        }
        client
    });

    let mut link = RobotLink::new(server);
    let identity = gridpilot_core::authenticate(&mut link).await.unwrap();
    assert_eq!(identity.username, "Mnau");
    assert_eq!(identity.base_hash, 5928);

    writer.await.unwrap();
}

#[tokio::test]
async fn repeat_sessions_are_independent() {
    // Two robots in sequence over fresh links; the second must see a
    // completely fresh handshake.
    for _ in 0..2 {
        let sent = serve_scripted(&script(&["Mnau", "1", "35300"])).await;
        let expected: Vec<u8> =
            [wire::KEY_REQUEST, b"37965\x07\x08".as_slice(), wire::LOGIN_FAILED].concat();
        assert_eq!(sent, expected);
    }
}
