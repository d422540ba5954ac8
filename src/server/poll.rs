use std::io::ErrorKind;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::mpsc::{channel, Sender};

use log::error;
use mio::{Events, Interest, Poll, Token, Waker};
use mio::net::{TcpListener, TcpStream};

use crate::server::slab::Slab;

/// The number of IO events processed at a time.
const POLL_EVENT_CAPACITY: usize = 128;

/// Initial number of connections to allocate space for.
const INITIAL_CONNECTION_CAPACITY: usize = 128;

/// Token used for the listener.
const LISTENER_TOKEN: Token = Token(usize::MAX);

/// Token used for waking the poll loop when connections are closed.
const WAKER_TOKEN: Token = Token(usize::MAX - 1);

/// Handle for telling the poll loop that a connection is gone, so its slot can be reused.
#[derive(Clone)]
pub struct Closer {
    sender: Sender<usize>,
    waker: Arc<Waker>,
}

impl Closer {
    /// Releases the connection with the given key. Must be called once per connection.
    pub fn close(&self, key: usize) {
        if self.sender.send(key).is_err() {
            return;
        }
        if let Err(err) = self.waker.wake() {
            error!("could not wake poll loop: {}", err);
        }
    }
}

/// Listens asynchronously on the given address. Calls on_new_connection for each new stream, and calls
/// on_io_ready for each stream that is IO ready.
/// The result of on_new_connection will be passed to on_io_ready, together with its key, when the
/// corresponding stream is ready for reading or writing.
pub fn listen<T>(addr: SocketAddr,
                 on_new_connection: impl Fn(TcpStream, SocketAddr) -> T,
                 on_io_ready: impl Fn(usize, &T, &Closer)) -> std::io::Result<()> {
    let mut listener = TcpListener::bind(addr)?;

    let mut poll = Poll::new()?;
    poll.registry().register(&mut listener, LISTENER_TOKEN, Interest::READABLE)?;

    let (sender, closed) = channel();
    let closer = Closer { sender, waker: Arc::new(Waker::new(poll.registry(), WAKER_TOKEN)?) };

    let mut connections = Slab::with_capacity(INITIAL_CONNECTION_CAPACITY);
    let mut events = Events::with_capacity(POLL_EVENT_CAPACITY);

    loop {
        match poll.poll(&mut events, None) {
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            result => result?
        }

        for event in events.iter() {
            match event.token() {
                LISTENER_TOKEN => accept_until_blocked(&listener, |(mut stream, addr)| {
                    let key = connections.vacant_key();
                    poll.registry().register(&mut stream, Token(key), Interest::READABLE | Interest::WRITABLE)?;
                    connections.insert(on_new_connection(stream, addr));
                    Ok(())
                }),
                WAKER_TOKEN => {
                    for key in closed.try_iter() {
                        connections.remove(key);
                    }
                }
                Token(key) => {
                    if let Some(connection) = connections.get(key) {
                        on_io_ready(key, connection, &closer);
                    }
                }
            }
        }
    }
}

/// Accepts new connections to the given listener until blocked. Calls on_connection for each connection stream.
fn accept_until_blocked(listener: &TcpListener, mut on_connection: impl FnMut((TcpStream, SocketAddr)) -> std::io::Result<()>) {
    loop {
        match listener.accept() {
            Ok(conn) => {
                if let Err(err) = on_connection(conn) {
                    error!("could not initialize connection: {}", err);
                }
            }
            Err(err) if err.kind() == ErrorKind::WouldBlock => break,
            Err(err) if err.kind() == ErrorKind::Interrupted => {}
            Err(err) => {
                error!("could not accept connection: {}", err);
                break;
            }
        }
    }
}
