//! Rendering of encryption capabilities.
//!
//! Produces summaries such as `WPA2 PSK (CCMP)`, `mixed WPA/WPA2 PSK (TKIP, CCMP)`
//! or `WEP Open System (WEP-40)`.

use crate::api::models::CryptoEntry;
use crate::render::UNKNOWN;
use crate::types::capabilities::{
    AuthAlgs, CIPHER_NAMES, Ciphers, KMGMT_NAMES, KeyMgmt, WpaVersion, set_bit_names,
};

/// Lists cipher names in bit order, separated by ", ".
pub fn ciphers(ciphers: Ciphers) -> String {
    set_bit_names(u32::from(ciphers.bits()), &CIPHER_NAMES)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Lists key management suites in bit order, separated by "/".
pub fn suites(suites: KeyMgmt) -> String {
    set_bit_names(u32::from(suites.bits()), &KMGMT_NAMES)
        .collect::<Vec<_>>()
        .join("/")
}

/// Summarizes an encryption capability entry.
///
/// `None` (the query failed) renders "unknown"; an open network renders "none".
pub fn encryption(entry: Option<&CryptoEntry>) -> String {
    let Some(c) = entry else {
        return UNKNOWN.to_string();
    };

    if c.is_open() {
        return "none".to_string();
    }

    if c.wpa_version.is_empty() {
        return wep(c);
    }

    wpa(c)
}

fn wep(c: &CryptoEntry) -> String {
    let auth = if c.auth_algs.contains(AuthAlgs::OPEN | AuthAlgs::SHARED) {
        "Open/Shared"
    } else if c.auth_algs.contains(AuthAlgs::OPEN) {
        "Open System"
    } else if c.auth_algs.contains(AuthAlgs::SHARED) {
        "Shared Auth"
    } else {
        return UNKNOWN.to_string();
    };
    format!("WEP {auth} ({})", ciphers(c.pair_ciphers))
}

fn wpa(c: &CryptoEntry) -> String {
    let versions: Vec<String> = [WpaVersion::WPA1, WpaVersion::WPA2, WpaVersion::WPA3]
        .iter()
        .enumerate()
        .filter(|(_, v)| c.wpa_version.contains(**v))
        .map(|(i, _)| match i {
            0 => "WPA".to_string(),
            n => format!("WPA{}", n + 1),
        })
        .collect();

    if versions.is_empty() {
        return UNKNOWN.to_string();
    }

    let mixed = if versions.len() > 1 { "mixed " } else { "" };
    format!(
        "{mixed}{} {} ({})",
        versions.join("/"),
        suites(c.auth_suites),
        ciphers(c.pair_ciphers | c.group_ciphers)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wpa_entry(version: WpaVersion, suites: KeyMgmt, pair: Ciphers, group: Ciphers) -> CryptoEntry {
        CryptoEntry {
            enabled: true,
            wpa_version: version,
            auth_suites: suites,
            pair_ciphers: pair,
            group_ciphers: group,
            ..Default::default()
        }
    }

    #[test]
    fn cipher_list_has_no_trailing_separator() {
        assert_eq!(ciphers(Ciphers::CCMP), "CCMP");
        assert_eq!(ciphers(Ciphers::TKIP | Ciphers::CCMP), "TKIP, CCMP");
        assert_eq!(ciphers(Ciphers::empty()), "");
    }

    #[test]
    fn suite_list_is_slash_separated() {
        assert_eq!(suites(KeyMgmt::PSK), "PSK");
        assert_eq!(suites(KeyMgmt::PSK | KeyMgmt::SAE), "PSK/SAE");
        assert_eq!(suites(KeyMgmt::IEEE8021X), "802.1X");
    }

    #[test]
    fn failed_query_is_unknown() {
        assert_eq!(encryption(None), "unknown");
    }

    #[test]
    fn disabled_is_none_regardless_of_ciphers() {
        let mut c = wpa_entry(WpaVersion::WPA2, KeyMgmt::PSK, Ciphers::CCMP, Ciphers::CCMP);
        c.enabled = false;
        assert_eq!(encryption(Some(&c)), "none");
    }

    #[test]
    fn enabled_without_auth_or_wpa_is_none() {
        let c = wpa_entry(WpaVersion::empty(), KeyMgmt::PSK, Ciphers::CCMP, Ciphers::CCMP);
        assert_eq!(encryption(Some(&c)), "none");
    }

    #[test]
    fn wpa2_psk_ccmp() {
        let c = wpa_entry(WpaVersion::WPA2, KeyMgmt::PSK, Ciphers::CCMP, Ciphers::CCMP);
        assert_eq!(encryption(Some(&c)), "WPA2 PSK (CCMP)");
    }

    #[test]
    fn mixed_wpa_wpa2() {
        let c = wpa_entry(
            WpaVersion::WPA1 | WpaVersion::WPA2,
            KeyMgmt::PSK,
            Ciphers::CCMP,
            Ciphers::TKIP,
        );
        assert_eq!(encryption(Some(&c)), "mixed WPA/WPA2 PSK (TKIP, CCMP)");
    }

    #[test]
    fn mixed_wpa2_wpa3_transition() {
        let c = wpa_entry(
            WpaVersion::WPA2 | WpaVersion::WPA3,
            KeyMgmt::PSK | KeyMgmt::SAE,
            Ciphers::CCMP,
            Ciphers::CCMP,
        );
        assert_eq!(encryption(Some(&c)), "mixed WPA2/WPA3 PSK/SAE (CCMP)");
    }

    #[test]
    fn wpa3_owe() {
        let c = wpa_entry(WpaVersion::WPA3, KeyMgmt::OWE, Ciphers::CCMP, Ciphers::CCMP);
        assert_eq!(encryption(Some(&c)), "WPA3 OWE (CCMP)");
    }

    #[test]
    fn wep_variants() {
        let mut c = CryptoEntry {
            enabled: true,
            auth_algs: AuthAlgs::OPEN,
            pair_ciphers: Ciphers::WEP40 | Ciphers::WEP104,
            ..Default::default()
        };
        assert_eq!(encryption(Some(&c)), "WEP Open System (WEP-40, WEP-104)");

        c.auth_algs = AuthAlgs::SHARED;
        assert_eq!(encryption(Some(&c)), "WEP Shared Auth (WEP-40, WEP-104)");

        c.auth_algs = AuthAlgs::OPEN | AuthAlgs::SHARED;
        assert_eq!(encryption(Some(&c)), "WEP Open/Shared (WEP-40, WEP-104)");
    }

    #[test]
    fn unnamed_bits_only_are_unknown() {
        let wep = CryptoEntry {
            enabled: true,
            auth_algs: AuthAlgs::from_bits_retain(0x80),
            ..Default::default()
        };
        assert_eq!(encryption(Some(&wep)), "unknown");

        let wpa = wpa_entry(
            WpaVersion::from_bits_retain(0x40),
            KeyMgmt::PSK,
            Ciphers::CCMP,
            Ciphers::CCMP,
        );
        assert_eq!(encryption(Some(&wpa)), "unknown");
    }

    #[test]
    fn rendering_is_repeatable() {
        let c = wpa_entry(WpaVersion::WPA2, KeyMgmt::IEEE8021X, Ciphers::GCMP256, Ciphers::GCMP256);
        assert_eq!(encryption(Some(&c)), encryption(Some(&c)));
    }
}
