use {serde::Serialize, std::sync::LazyLock};

static BASE_SERVICES: LazyLock<BaseServices> = LazyLock::new(BaseServices::default);

/// Auxiliary service endpoints the wallet talks to. Unlike the network
/// table these are the same in every stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct BaseServices {
    pub wallet_service: String,
    pub seller_optimism_api_url: String,
    pub buyer_optimism_api_url: String,
    pub service_optimism_api_url: String,
    pub websocket_api_url: String,
    pub coin_gecko_url: String,
    pub eth_gas_station_url: String,
}

impl Default for BaseServices {
    fn default() -> Self {
        BaseServices {
            wallet_service: "https://api-service.boba.network/".to_owned(),
            seller_optimism_api_url: "https://pm7f0dp9ud.execute-api.us-west-1.amazonaws.com/prod/"
                .to_owned(),
            buyer_optimism_api_url: "https://n245h0ka3i.execute-api.us-west-1.amazonaws.com/prod/"
                .to_owned(),
            service_optimism_api_url:
                "https://zlba6djrv6.execute-api.us-west-1.amazonaws.com/prod/".to_owned(),
            websocket_api_url: "wss://d1cj5xnal2.execute-api.us-west-1.amazonaws.com/prod"
                .to_owned(),
            coin_gecko_url: "https://api.coingecko.com/api/v3/".to_owned(),
            eth_gas_station_url: "https://ethgasstation.info/".to_owned(),
        }
    }
}

/// The fixed service table, initialized on first access.
pub fn base_services() -> &'static BaseServices {
    &BASE_SERVICES
}
