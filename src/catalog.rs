//! Static catalog of Bitkub API error codes.
//!
//! The documented code space covers validation errors (1–25), business
//! rule errors (30–55), and operational errors (90 and 404). Code `0` is
//! the designated success code. Codes outside the documented set are
//! reported as [`ErrorCode::Unknown`] so an undecodable error can never
//! be mistaken for success.

/// The code the exchange returns when a request succeeded.
pub const SUCCESS_CODE: u32 = 0;

/// A resolved exchange error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// A code from the documented catalog with its canned description.
    Known {
        code: u32,
        description: &'static str,
    },
    /// A nonzero code absent from the documented catalog.
    Unknown(u32),
}

impl ErrorCode {
    /// Returns the numeric code.
    pub fn code(&self) -> u32 {
        match self {
            Self::Known { code, .. } => *code,
            Self::Unknown(code) => *code,
        }
    }

    /// Returns the human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Known { description, .. } => description,
            Self::Unknown(_) => "unknown error code",
        }
    }
}

/// Resolves an exchange error code.
///
/// Returns `None` for the success code, `Some(Known { .. })` for every
/// documented code, and `Some(Unknown(..))` for anything else.
pub fn lookup(code: u32) -> Option<ErrorCode> {
    if code == SUCCESS_CODE {
        return None;
    }
    match description(code) {
        Some(description) => Some(ErrorCode::Known { code, description }),
        None => Some(ErrorCode::Unknown(code)),
    }
}

fn description(code: u32) -> Option<&'static str> {
    let description = match code {
        1 => "Invalid JSON payload",
        2 => "Missing X-BTK-APIKEY",
        3 => "Invalid API key",
        4 => "API pending for activation",
        5 => "IP not allowed",
        6 => "Missing / invalid signature",
        7 => "Missing timestamp",
        8 => "Invalid timestamp",
        9 => "Invalid user",
        10 => "Invalid parameter",
        11 => "Invalid symbol",
        12 => "Invalid amount",
        13 => "Invalid rate",
        14 => "Improper rate",
        15 => "Amount too low",
        16 => "Failed to get balance",
        17 => "Wallet is empty",
        18 => "Insufficient balance",
        19 => "Failed to insert order into db",
        20 => "Failed to deduct balance",
        21 => "Invalid order for cancellation",
        22 => "Invalid side",
        23 => "Failed to update order status",
        24 => "Invalid order for lookup",
        25 => "KYC level 1 is required to proceed",
        30 => "Limit exceeds",
        40 => "Pending withdrawal exists",
        41 => "Invalid currency for withdrawal",
        42 => "Address is not in whitelist",
        43 => "Failed to deduct crypto",
        44 => "Failed to create withdrawal record",
        45 => "Nonce has to be numeric",
        46 => "Invalid nonce",
        47 => "Withdrawal limit exceeds",
        48 => "Invalid bank account",
        49 => "Bank limit exceeds",
        50 => "Pending withdrawal exists",
        51 => "Withdrawal is under maintenance",
        52 => "Invalid permission",
        53 => "Invalid internal address",
        54 => "Address has been deprecated",
        55 => "Cancel only mode",
        90 => "Server error (please contact support)",
        404 => "Not Found",
        _ => return None,
    };
    Some(description)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENTED_CODES: [u32; 44] = [
        1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23,
        24, 25, 30, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 51, 52, 53, 54, 55, 90, 404,
    ];

    #[test]
    fn success_code_resolves_to_none() {
        assert_eq!(lookup(SUCCESS_CODE), None);
    }

    #[test]
    fn documented_codes_have_nonempty_descriptions() {
        for code in DOCUMENTED_CODES {
            let resolved = lookup(code).expect("documented code must resolve");
            assert_eq!(resolved.code(), code);
            assert!(
                matches!(resolved, ErrorCode::Known { .. }),
                "code {code} should be known"
            );
            assert!(!resolved.description().is_empty());
        }
    }

    #[test]
    fn undocumented_codes_are_tagged_unknown() {
        for code in [26, 31, 56, 89, 91, 403, 999] {
            let resolved = lookup(code).expect("nonzero code must resolve");
            assert_eq!(resolved, ErrorCode::Unknown(code));
            assert_eq!(resolved.description(), "unknown error code");
        }
    }

    #[test]
    fn known_descriptions_match_the_api_docs() {
        assert_eq!(lookup(3).unwrap().description(), "Invalid API key");
        assert_eq!(lookup(18).unwrap().description(), "Insufficient balance");
        assert_eq!(lookup(55).unwrap().description(), "Cancel only mode");
        assert_eq!(lookup(404).unwrap().description(), "Not Found");
    }
}
