use canopy_core::{ChildProtocol, ParentProtocol, StaticDirectory};

pub const ACME_ID: &str = "parent#acme";

pub fn acme() -> ParentProtocol {
    ParentProtocol {
        url: Some("https://acme.example".to_string()),
        description: Some("Lending, swaps and a bridge under one roof".to_string()),
        chains: vec!["Ethereum".to_string(), "Arbitrum".to_string()],
        twitter: Some("acme".to_string()),
        ..ParentProtocol::new(ACME_ID, "Acme")
    }
}

pub fn directory() -> StaticDirectory {
    StaticDirectory::new(vec![
        ChildProtocol::new("101", "Acme Lend", ACME_ID),
        ChildProtocol::new("102", "Acme Swap", ACME_ID),
        ChildProtocol::new("103", "Acme Bridge", ACME_ID),
        ChildProtocol::new("201", "Loner", "parent#nobody"),
        ChildProtocol {
            id: "301".to_string(),
            name: "Orphan".to_string(),
            parent_protocol: None,
        },
    ])
}
