use {ipnet::IpNet, std::net::IpAddr};

#[derive(thiserror::Error, Debug)]
pub enum NetworkInterfaceError {
    #[error("machine has no usable local IP address")]
    LocalAddressNotFound,
}

/// Attempts to find the local IPv4 address this machine is reachable on,
/// used to point development-stage URLs at the current host.
pub fn find_local_host_addr() -> Result<IpAddr, NetworkInterfaceError> {
    pnet_datalink::interfaces()
        .into_iter()
        .filter(|iface| iface.is_up() && !iface.is_loopback())
        .flat_map(|iface| {
            iface
                .ips
                .into_iter()
                .filter(|ip| ip.is_ipv4() && is_host_candidate(ip.ip()))
                .map(|ip| ip.ip())
        })
        .next()
        .ok_or(NetworkInterfaceError::LocalAddressNotFound)
}

fn is_host_candidate(addr: IpAddr) -> bool {
    use once_cell::sync::Lazy;

    static EXCLUDED_NETWORKS: Lazy<[IpNet; 5]> = Lazy::new(|| {
        [
            "0.0.0.0/8",
            "127.0.0.0/8",
            "169.254.0.0/16",
            "240.0.0.0/4",
            "255.255.255.255/32",
        ]
        .map(|net| net.parse().unwrap())
    });

    EXCLUDED_NETWORKS.iter().all(|range| !range.contains(&addr))
}
