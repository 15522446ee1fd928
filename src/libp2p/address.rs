use std::net::Ipv4Addr;
use std::ops::Range;

use libp2p::multiaddr::Protocol;
use libp2p::Multiaddr;
use rand::Rng;

const TEST_PORTS: Range<u16> = 10000..60000;

/// A `/ip4/127.0.0.1/tcp/<port>` address on a random test port.
pub fn rand_local_tcp_address() -> Multiaddr {
    let port = rand::rng().random_range(TEST_PORTS);

    Multiaddr::empty()
        .with(Protocol::Ip4(Ipv4Addr::LOCALHOST))
        .with(Protocol::Tcp(port))
}
