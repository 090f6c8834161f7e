use {
    crate::{env::Config, error::ConfigResult},
    serde::Serialize,
    std::collections::BTreeMap,
    tracing::{debug, warn},
};

/// A single chain endpoint, either the base layer or the rollup built
/// on top of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainDescriptor {
    pub name: String,
    pub chain_id: u64,
    pub chain_id_hex: String,
    pub rpc_url: String,
    pub block_explorer: Option<String>,
    pub transaction: Option<String>,
}

impl ChainDescriptor {
    fn new(
        name: &str,
        chain_id: u64,
        rpc_url: String,
        block_explorer: Option<String>,
        transaction: Option<String>,
    ) -> Self {
        Self {
            name: name.to_owned(),
            chain_id,
            // Derived, never written by hand: both forms always name the
            // same chain.
            chain_id_hex: format!("{chain_id:#X}"),
            rpc_url,
            block_explorer,
            transaction,
        }
    }
}

/// Everything the wallet needs to talk to one deployment: the L1/L2
/// endpoint pair, the address manifests and the watcher service.
/// Absent fields are `None` on purpose, not "not yet loaded".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkDescriptor {
    #[serde(rename = "addressUrl")]
    pub address_url: Option<String>,
    #[serde(rename = "addressOMGXUrl")]
    pub address_omgx_url: Option<String>,
    #[serde(rename = "OMGX_WATCHER_URL")]
    pub omgx_watcher_url: Option<String>,
    #[serde(rename = "MM_Label")]
    pub mm_label: String,
    #[serde(rename = "addressManager")]
    pub address_manager: Option<String>,
    #[serde(rename = "L1")]
    pub l1: ChainDescriptor,
    #[serde(rename = "L2")]
    pub l2: ChainDescriptor,
}

/// The per-stage network table, built once at startup and read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Registry {
    networks: BTreeMap<String, NetworkDescriptor>,
}

impl Registry {
    pub fn from_env() -> ConfigResult<Registry> {
        let config = Config::from_env()?;
        let host = config.host_addr();
        Ok(Registry::new(&config, &host))
    }

    pub fn new(config: &Config, host: &str) -> Self {
        if config.infura_project_id.is_empty() {
            warn!("GATEWAY_INFURA_PROJECT_ID is not set, Infura RPC URLs will have an empty project segment");
        }
        if config.etherscan_api_key.is_empty() {
            warn!("GATEWAY_ETHERSCAN_API_KEY is not set, Etherscan explorer URLs will have an empty key");
        }

        let mut networks = if config.stage.is_dev() {
            dev_networks(config, host)
        } else {
            BTreeMap::new()
        };
        // Key sets never overlap, this is a plain union.
        networks.extend(base_networks(config));

        debug!(
            "network registry built with {} entries for stage {:?}",
            networks.len(),
            config.stage
        );

        Self { networks }
    }

    /// The complete environment-label to descriptor mapping.
    pub fn all_networks(&self) -> &BTreeMap<String, NetworkDescriptor> {
        &self.networks
    }

    pub fn network(&self, name: &str) -> Option<&NetworkDescriptor> {
        self.networks.get(name)
    }
}

/// Networks available in every stage.
fn base_networks(config: &Config) -> BTreeMap<String, NetworkDescriptor> {
    BTreeMap::from([
        (
            "rinkeby".to_owned(),
            NetworkDescriptor {
                address_url: None,
                address_omgx_url: None,
                omgx_watcher_url: Some("https://api-watcher.rinkeby.boba.network/".to_owned()),
                mm_label: "Rinkeby".to_owned(),
                address_manager: Some("0x93A96D6A5beb1F661cf052722A1424CDDA3e9418".to_owned()),
                l1: ChainDescriptor::new(
                    "Rinkeby",
                    4,
                    infura_rpc_url("rinkeby", &config.infura_project_id),
                    Some(etherscan_txlist_url("api-rinkeby", &config.etherscan_api_key)),
                    Some("https://rinkeby.etherscan.io/tx/".to_owned()),
                ),
                l2: ChainDescriptor::new(
                    "BOBA Rinkeby L2",
                    28,
                    "https://rinkeby.boba.network".to_owned(),
                    Some("https://blockexplorer.rinkeby.boba.network/".to_owned()),
                    Some("https://blockexplorer.rinkeby.boba.network/tx/".to_owned()),
                ),
            },
        ),
        (
            "mainnet".to_owned(),
            NetworkDescriptor {
                address_url: Some("https://mainnet.boba.network:8080/addresses.json".to_owned()),
                address_omgx_url: Some("https://mainnet.boba.network:8080/boba-addr.json".to_owned()),
                omgx_watcher_url: Some("https://api-watcher.mainnet.boba.network/".to_owned()),
                mm_label: "Mainnet".to_owned(),
                address_manager: None,
                l1: ChainDescriptor::new(
                    "Mainnet",
                    1,
                    infura_rpc_url("mainnet", &config.infura_project_id),
                    Some(etherscan_txlist_url("api", &config.etherscan_api_key)),
                    Some("https://etherscan.io/tx/".to_owned()),
                ),
                l2: ChainDescriptor::new(
                    "BOBA L2",
                    288,
                    "https://mainnet.boba.network".to_owned(),
                    Some("https://blockexplorer.boba.network/".to_owned()),
                    Some("https://blockexplorer.boba.network/tx/".to_owned()),
                ),
            },
        ),
    ])
}

/// Networks only reachable from a development checkout. RPC and
/// manifest URLs point at the current host so the whole stack can run
/// on one machine.
fn dev_networks(config: &Config, host: &str) -> BTreeMap<String, NetworkDescriptor> {
    BTreeMap::from([
        (
            "local".to_owned(),
            NetworkDescriptor {
                address_url: Some(format!("http://{host}:8080/addresses.json")),
                address_omgx_url: Some(format!("http://{host}:8080/boba-addr.json")),
                omgx_watcher_url: None,
                mm_label: "Local".to_owned(),
                address_manager: Some("0x5FbDB2315678afecb367f032d93F642f64180aa3".to_owned()),
                l1: ChainDescriptor::new(
                    "Local L1",
                    31337,
                    format!("http://{host}:9545"),
                    None,
                    None,
                ),
                l2: ChainDescriptor::new(
                    "Local L2",
                    31338,
                    format!("http://{host}:8545"),
                    None,
                    None,
                ),
            },
        ),
        (
            "rinkeby_integration".to_owned(),
            NetworkDescriptor {
                address_url: Some(
                    "https://rinkeby-integration.boba.network:8080/addresses.json".to_owned(),
                ),
                address_omgx_url: Some(
                    "https://rinkeby-integration.boba.network:8080/boba-addr.json".to_owned(),
                ),
                omgx_watcher_url: Some(
                    "https://api-watcher.rinkeby-integration.boba.network/".to_owned(),
                ),
                mm_label: "Rinkeby Int Test".to_owned(),
                address_manager: None,
                l1: ChainDescriptor::new(
                    "Rinkeby",
                    4,
                    infura_rpc_url("rinkeby", &config.infura_project_id),
                    Some(etherscan_txlist_url("api-rinkeby", &config.etherscan_api_key)),
                    Some("https://rinkeby.etherscan.io/tx/".to_owned()),
                ),
                l2: ChainDescriptor::new(
                    "BOBA Rinkeby Int L2",
                    29,
                    "https://rinkeby-integration.boba.network".to_owned(),
                    Some("https://blockexplorer.rinkeby.boba.network/".to_owned()),
                    Some("https://blockexplorer.rinkeby.boba.network/tx/".to_owned()),
                ),
            },
        ),
    ])
}

fn infura_rpc_url(network: &str, project_id: &str) -> String {
    format!("https://{network}.infura.io/v3/{project_id}")
}

fn etherscan_txlist_url(subdomain: &str, api_key: &str) -> String {
    format!(
        "https://{subdomain}.etherscan.io/api?module=account&action=txlist&startblock=0&endblock=99999999&sort=asc&apikey={api_key}"
    )
}
