//! Loopback tests for the TCP transport.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

use tracerlink_client::TcpTransport;
use tracerlink_protocol::Transport;

#[test]
fn test_recv_serves_small_reads_from_one_socket_chunk() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap().to_string();

    let server = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        stream.write_all(&[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        // Hold the socket open until the client is done reading.
        thread::sleep(Duration::from_millis(200));
    });

    let mut transport = TcpTransport::with_timeout(&addr, Duration::from_secs(2));
    let mut byte = [0u8; 1];
    for expected in 1..=8u8 {
        assert_eq!(transport.recv(&mut byte).unwrap(), 1);
        assert_eq!(byte[0], expected);
    }

    server.join().unwrap();
}

#[test]
fn test_send_reaches_the_peer() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap().to_string();

    let server = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut buf = [0u8; 5];
        stream.read_exact(&mut buf).unwrap();
        buf
    });

    let mut transport = TcpTransport::new(&addr);
    transport.send(b"hello").unwrap();

    assert_eq!(&server.join().unwrap(), b"hello");
}

#[test]
fn test_reconnects_lazily_after_peer_hangup() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap().to_string();

    let server = thread::spawn(move || {
        // First connection is dropped straight away.
        let (first, _) = listener.accept().unwrap();
        drop(first);
        // Second connection receives the retried request.
        let (mut second, _) = listener.accept().unwrap();
        let mut buf = [0u8; 4];
        second.read_exact(&mut buf).unwrap();
        buf
    });

    let mut transport = TcpTransport::with_timeout(&addr, Duration::from_secs(2));
    transport.connect().unwrap();
    assert!(transport.is_connected());

    // Give the hangup time to reach us, then observe it.
    thread::sleep(Duration::from_millis(100));
    let mut byte = [0u8; 1];
    assert_eq!(transport.recv(&mut byte).unwrap(), 0);
    assert!(!transport.is_connected());

    // The next send reconnects on its own.
    transport.send(b"ping").unwrap();
    assert!(transport.is_connected());
    assert_eq!(&server.join().unwrap(), b"ping");
}

#[test]
fn test_disconnect_clears_connection_and_buffer() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap().to_string();

    let server = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        stream.write_all(&[0xAA, 0xBB, 0xCC]).unwrap();
        thread::sleep(Duration::from_millis(200));
    });

    let mut transport = TcpTransport::with_timeout(&addr, Duration::from_secs(2));
    let mut byte = [0u8; 1];
    assert_eq!(transport.recv(&mut byte).unwrap(), 1);

    transport.disconnect();
    assert!(!transport.is_connected());

    server.join().unwrap();
}
