//! Named scalar predicates ("atoms") referenced by the `is:` clause.
//!
//! The registry is an ordinary value owned by the caller. Build it once
//! (usually [`AtomRegistry::builtin`] plus any custom registrations), hand it
//! to a [`Validator`](crate::engine::Validator), and it is shared read-only by
//! every validation from then on.

pub mod codes;
pub mod patterns;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::value::Scalar;
use patterns::*;

type PredicateFn = dyn Fn(&Scalar<'_>) -> bool + Send + Sync;

/// A boolean format check over one scalar.
#[derive(Clone)]
pub struct Predicate(Arc<PredicateFn>);

impl Predicate {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Scalar<'_>) -> bool + Send + Sync + 'static,
    {
        Predicate(Arc::new(f))
    }

    pub fn check(&self, value: &Scalar<'_>) -> bool {
        (self.0)(value)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}

// ─── Built-in catalog ───────────────────────────────────────────────────────

/// An entry in the built-in atom catalog.
#[derive(Clone, Copy, Debug)]
pub struct AtomEntry {
    pub name: &'static str,
    pub check: fn(&Scalar<'_>) -> bool,
}

macro_rules! atoms {
    ($($name:literal => $check:path),* $(,)?) => {
        &[$(AtomEntry { name: $name, check: $check }),*]
    };
}

/// Every predicate [`AtomRegistry::builtin`] starts with.
pub static BUILTIN_ATOMS: &[AtomEntry] = atoms![
    "phone" => is_phone,
    "username" => is_username,
    "password" => is_password,
    "strongPassword" => is_strong_password,
    "countryCodeAlpha2" => is_country_code_alpha2,
    "countryCodeAlpha3" => is_country_code_alpha3,
    "countryCodeNumeric" => is_country_code_numeric,
    "countryCode" => is_country_code,
    "currency" => is_currency,
    "currencyNumeric" => is_currency_numeric,
    "alpha" => is_alpha,
    "alphaNumeric" => is_alpha_numeric,
    "alphaUnicode" => is_alpha_unicode,
    "alphaUnicodeNumeric" => is_alpha_unicode_numeric,
    "numeric" => is_numeric,
    "number" => is_number,
    "hexadecimal" => is_hexadecimal,
    "hexColor" => is_hex_color,
    "rgb" => is_rgb,
    "rgba" => is_rgba,
    "hsl" => is_hsl,
    "hsla" => is_hsla,
    "e164" => is_e164,
    "email" => is_email,
    "base64" => is_base64,
    "base64Url" => is_base64_url,
    "base64RawUrl" => is_base64_raw_url,
    "isbn10" => is_isbn10,
    "isbn13" => is_isbn13,
    "uuid3" => is_uuid3,
    "uuid4" => is_uuid4,
    "uuid5" => is_uuid5,
    "uuid" => is_uuid,
    "uuid3Rfc4122" => is_uuid3_rfc4122,
    "uuid4Rfc4122" => is_uuid4_rfc4122,
    "uuid5Rfc4122" => is_uuid5_rfc4122,
    "uuidRfc4122" => is_uuid_rfc4122,
    "ulid" => is_ulid,
    "md4" => is_md4,
    "md5" => is_md5,
    "sha256" => is_sha256,
    "sha384" => is_sha384,
    "sha512" => is_sha512,
    "ripemd128" => is_ripemd128,
    "ripemd160" => is_ripemd160,
    "tiger128" => is_tiger128,
    "tiger160" => is_tiger160,
    "tiger192" => is_tiger192,
    "ascii" => is_ascii,
    "printableAscii" => is_printable_ascii,
    "multibyte" => is_multibyte,
    "dataUri" => is_data_uri,
    "latitude" => is_latitude,
    "longitude" => is_longitude,
    "ssn" => is_ssn,
    "hostnameRfc952" => is_hostname_rfc952,
    "hostnameRfc1123" => is_hostname_rfc1123,
    "fqdn" => is_fqdn,
    "btcAddress" => is_btc_address,
    "btcUpperAddress" => is_btc_upper_address,
    "btcLowerAddress" => is_btc_lower_address,
    "ethAddress" => is_eth_address,
    "urlEncoded" => is_url_encoded,
    "htmlEncoded" => is_html_encoded,
    "html" => is_html,
    "jwt" => is_jwt,
    "bic" => is_bic,
    "semver" => is_semver,
    "dns" => is_dns,
    "cve" => is_cve,
    "mongodb" => is_mongodb,
    "cron" => is_cron,
];

// ─── AtomRegistry ───────────────────────────────────────────────────────────

/// Predicate name → predicate.
///
/// Registering a name that already exists replaces it.
#[derive(Clone, Debug)]
pub struct AtomRegistry {
    atoms: HashMap<String, Predicate>,
}

impl Default for AtomRegistry {
    fn default() -> Self {
        AtomRegistry::builtin()
    }
}

impl AtomRegistry {
    pub fn empty() -> Self {
        AtomRegistry {
            atoms: HashMap::new(),
        }
    }

    /// A registry preloaded with [`BUILTIN_ATOMS`].
    pub fn builtin() -> Self {
        let mut registry = AtomRegistry::empty();
        for entry in BUILTIN_ATOMS {
            registry.register(entry.name, entry.check);
        }
        registry
    }

    pub fn register<F>(&mut self, name: &str, predicate: F) -> &mut Self
    where
        F: Fn(&Scalar<'_>) -> bool + Send + Sync + 'static,
    {
        self.atoms.insert(name.to_string(), Predicate::new(predicate));
        self
    }

    /// Builder-style [`register`](Self::register).
    pub fn with<F>(mut self, name: &str, predicate: F) -> Self
    where
        F: Fn(&Scalar<'_>) -> bool + Send + Sync + 'static,
    {
        self.register(name, predicate);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Predicate> {
        self.atoms.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.atoms.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.atoms.keys().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Runs `names` against `value` in order.
    ///
    /// Returns `None` when none of the names is registered, otherwise whether
    /// any registered predicate accepted the value.
    pub fn check_any(&self, names: &[String], value: &Scalar<'_>) -> Option<bool> {
        let mut resolved = false;
        for name in names {
            if let Some(predicate) = self.atoms.get(name) {
                resolved = true;
                if predicate.check(value) {
                    return Some(true);
                }
            }
        }
        resolved.then_some(false)
    }
}
