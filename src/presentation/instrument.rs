use serde::{Deserialize, Serialize};

/// A tradeable instrument, fetched by URL to resolve symbols
///
/// Order and dividend records reference instruments by URL only; the service
/// layer fetches these to attach a ticker symbol to each record.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Instrument {
    /// Upstream instrument identifier
    #[serde(default)]
    pub id: String,
    /// Canonical URL of this instrument
    #[serde(default)]
    pub url: String,
    /// Ticker symbol
    #[serde(default)]
    pub symbol: String,
    /// Full instrument name
    #[serde(default)]
    pub name: String,
    /// Short display name, when the upstream has one
    #[serde(default)]
    pub simple_name: Option<String>,
    /// Whether the instrument is currently tradeable
    #[serde(default)]
    pub tradeable: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instrument_deserializes() {
        let json = r#"{
            "id": "abc-123",
            "url": "https://api.example.com/instruments/abc-123/",
            "symbol": "AAPL",
            "name": "Apple Inc. Common Stock",
            "simple_name": "Apple",
            "tradeable": true
        }"#;
        let instrument: Instrument = serde_json::from_str(json).unwrap();
        assert_eq!(instrument.symbol, "AAPL");
        assert_eq!(instrument.simple_name.as_deref(), Some("Apple"));
    }
}
