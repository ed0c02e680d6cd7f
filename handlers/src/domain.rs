//! The closed set of keyed-lookup command domains. Each variant owns one
//! command, one lookup table and one reply format.

use sheets_lookup::LookupRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupDomain {
    BankDetails,
    CryptoAddress,
}

impl LookupDomain {
    /// Command name this domain answers (lowercase, no slash).
    pub fn command(self) -> &'static str {
        match self {
            LookupDomain::BankDetails => "bdetails",
            LookupDomain::CryptoAddress => "atme_address",
        }
    }

    /// Sheet title of this domain's lookup table.
    pub fn table(self) -> &'static str {
        match self {
            LookupDomain::BankDetails => "bank details",
            LookupDomain::CryptoAddress => "crypto address",
        }
    }

    /// Reply for a command sent without a key.
    pub fn usage_hint(self) -> &'static str {
        match self {
            LookupDomain::BankDetails => {
                "Please specify the key for bank details. Example: /bdetails bhd-bbk"
            }
            LookupDomain::CryptoAddress => {
                "Please specify the key for the crypto address. Example: /atme_address usdt"
            }
        }
    }

    /// Reply for a key with no matching record.
    pub fn not_found_text(self) -> &'static str {
        match self {
            LookupDomain::BankDetails => "Requested bank details are not saved",
            LookupDomain::CryptoAddress => "Requested crypto address is not saved",
        }
    }

    /// Reply body for a found record.
    pub fn format(self, record: &LookupRecord) -> String {
        match self {
            LookupDomain::BankDetails => format!(
                "ATME bank details for {} ({}):\nIBAN: {}\nSWIFT: {}",
                record.field("Bank name"),
                record.field("Currency"),
                record.field("IBAN"),
                record.field("Swift code"),
            ),
            LookupDomain::CryptoAddress => format!(
                "ATME OTC address for {}:\n{}",
                record.field("Asset"),
                record.field("Address"),
            ),
        }
    }

    /// Whether a found record's file reference is sent as an attachment.
    /// The crypto table carries the column but the desk never sends it.
    pub fn attaches_file(self) -> bool {
        matches!(self, LookupDomain::BankDetails)
    }

    /// Caption for the confirmation document.
    pub fn attachment_caption(self, key: &str) -> String {
        format!("Confirmation of banking details: {}.pdf", key)
    }
}
