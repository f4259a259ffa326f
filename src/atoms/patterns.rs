//! Built-in format predicates.
//!
//! Every predicate fails closed: a value of the wrong scalar type is simply
//! not in the format. Predicates that make sense for numbers (`number`,
//! `latitude`, `countryCodeNumeric`, …) accept numeric scalars as well as
//! their string spelling.

use regex::Regex;
use std::sync::LazyLock;

use super::codes;
use crate::value::Scalar;

fn matches_text(value: &Scalar<'_>, re: &Regex) -> bool {
    value.as_str().is_some_and(|s| re.is_match(s))
}

/// Declares a cached regex and a string predicate backed by it.
macro_rules! regex_atom {
    ($(#[$doc:meta])* $name:ident, $re:ident, $pattern:expr) => {
        static $re: LazyLock<Regex> = LazyLock::new(|| Regex::new($pattern).unwrap());

        $(#[$doc])*
        pub fn $name(value: &Scalar<'_>) -> bool {
            matches_text(value, &$re)
        }
    };
}

// ─── Character classes ──────────────────────────────────────────────────────

regex_atom!(is_alpha, ALPHA_RE, r"^[a-zA-Z]+$");
regex_atom!(is_alpha_numeric, ALPHA_NUMERIC_RE, r"^[a-zA-Z0-9]+$");
regex_atom!(is_alpha_unicode, ALPHA_UNICODE_RE, r"^\p{L}+$");
regex_atom!(is_alpha_unicode_numeric, ALPHA_UNICODE_NUMERIC_RE, r"^[\p{L}\p{N}]+$");
regex_atom!(is_hexadecimal, HEXADECIMAL_RE, r"^(?:0[xX])?[0-9a-fA-F]+$");

static NUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-+]?[0-9]+(?:\.[0-9]+)?$").unwrap());

static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// Signed decimal: `-12`, `+3.5`, or any finite number.
pub fn is_numeric(value: &Scalar<'_>) -> bool {
    match value {
        Scalar::Str(s) => NUMERIC_RE.is_match(s),
        other => other.as_f64().is_some_and(f64::is_finite),
    }
}

/// Unsigned integer: digits only, or a non-negative integral number.
pub fn is_number(value: &Scalar<'_>) -> bool {
    match value {
        Scalar::Str(s) => NUMBER_RE.is_match(s),
        Scalar::Uint(_) => true,
        other => other.as_i64().is_some_and(|i| i >= 0),
    }
}

pub fn is_ascii(value: &Scalar<'_>) -> bool {
    value.as_str().is_some_and(|s| s.is_ascii())
}

pub fn is_printable_ascii(value: &Scalar<'_>) -> bool {
    value
        .as_str()
        .is_some_and(|s| s.bytes().all(|b| (0x20..=0x7e).contains(&b)))
}

/// Contains at least one non-ASCII character.
pub fn is_multibyte(value: &Scalar<'_>) -> bool {
    value.as_str().is_some_and(|s| !s.is_ascii())
}

// ─── Colors ─────────────────────────────────────────────────────────────────

const BYTE: &str = r"(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])";
const PERCENT: &str = r"(?:100|[1-9]?[0-9])%";
const HUE: &str = r"(?:360|3[0-5][0-9]|[12][0-9]{2}|[1-9]?[0-9])";
const ALPHA: &str = r"(?:0(?:\.[0-9]+)?|1(?:\.0+)?|\.[0-9]+)";

regex_atom!(
    is_hex_color,
    HEX_COLOR_RE,
    r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$"
);
regex_atom!(
    is_rgb,
    RGB_RE,
    &format!(
        r"^rgb\(\s*(?:{b}\s*,\s*{b}\s*,\s*{b}|{p}\s*,\s*{p}\s*,\s*{p})\s*\)$",
        b = BYTE,
        p = PERCENT
    )
);
regex_atom!(
    is_rgba,
    RGBA_RE,
    &format!(
        r"^rgba\(\s*(?:{b}\s*,\s*{b}\s*,\s*{b}|{p}\s*,\s*{p}\s*,\s*{p})\s*,\s*{a}\s*\)$",
        b = BYTE,
        p = PERCENT,
        a = ALPHA
    )
);
regex_atom!(
    is_hsl,
    HSL_RE,
    &format!(
        r"^hsl\(\s*{h}\s*,\s*{p}\s*,\s*{p}\s*\)$",
        h = HUE,
        p = PERCENT
    )
);
regex_atom!(
    is_hsla,
    HSLA_RE,
    &format!(
        r"^hsla\(\s*{h}\s*,\s*{p}\s*,\s*{p}\s*,\s*{a}\s*\)$",
        h = HUE,
        p = PERCENT,
        a = ALPHA
    )
);

// ─── Contact and identity ───────────────────────────────────────────────────

regex_atom!(
    is_email,
    EMAIL_RE,
    r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$"
);
regex_atom!(
    /// E.164: `+`, a non-zero country digit, 8 to 15 digits in total.
    is_e164,
    E164_RE,
    r"^\+[1-9][0-9]{7,14}$"
);
regex_atom!(
    /// Optional `+` followed by 6 to 15 digits.
    is_phone,
    PHONE_RE,
    r"^\+?[0-9]{6,15}$"
);
regex_atom!(
    /// A letter followed by 2 to 31 letters, digits, `_`, `-` or `.`.
    is_username,
    USERNAME_RE,
    r"^[a-zA-Z][a-zA-Z0-9_.-]{2,31}$"
);
regex_atom!(
    is_ssn,
    SSN_RE,
    r"^[0-9]{3}[ -]?(?:0[1-9]|[1-9][0-9])[ -]?(?:[1-9][0-9]{3}|[0-9][1-9][0-9]{2}|[0-9]{2}[1-9][0-9]|[0-9]{3}[1-9])$"
);
regex_atom!(
    is_bic,
    BIC_RE,
    r"^[A-Za-z]{6}[A-Za-z0-9]{2}(?:[A-Za-z0-9]{3})?$"
);

const PASSWORD_MIN_LEN: usize = 8;

#[derive(Default)]
struct PasswordClasses {
    digit: bool,
    upper: bool,
    lower: bool,
    special: bool,
}

fn password_classes(value: &Scalar<'_>) -> Option<PasswordClasses> {
    let password = value.as_str()?;
    if !password.is_ascii() || password.len() < PASSWORD_MIN_LEN {
        return None;
    }
    let mut classes = PasswordClasses::default();
    for b in password.bytes() {
        match b {
            b'a'..=b'z' => classes.lower = true,
            b'A'..=b'Z' => classes.upper = true,
            b'0'..=b'9' => classes.digit = true,
            _ => classes.special = true,
        }
    }
    Some(classes)
}

/// ASCII, at least 8 bytes, with a digit and a letter.
pub fn is_password(value: &Scalar<'_>) -> bool {
    password_classes(value).is_some_and(|c| c.digit && (c.upper || c.lower))
}

/// ASCII, at least 8 bytes, with a digit, an upper and a lower case letter
/// and one byte that is none of those.
pub fn is_strong_password(value: &Scalar<'_>) -> bool {
    password_classes(value).is_some_and(|c| c.digit && c.upper && c.lower && c.special)
}

// ─── Country and currency codes ─────────────────────────────────────────────

fn integral(value: &Scalar<'_>) -> Option<i64> {
    match value {
        Scalar::Str(s) if NUMBER_RE.is_match(s) => s.parse().ok(),
        Scalar::Str(_) | Scalar::Bool(_) => None,
        other => other.as_i64(),
    }
}

pub fn is_country_code_alpha2(value: &Scalar<'_>) -> bool {
    value.as_str().is_some_and(codes::is_alpha2)
}

pub fn is_country_code_alpha3(value: &Scalar<'_>) -> bool {
    value.as_str().is_some_and(codes::is_alpha3)
}

pub fn is_country_code_numeric(value: &Scalar<'_>) -> bool {
    integral(value).is_some_and(codes::is_country_number)
}

/// Any of the three ISO 3166-1 forms.
pub fn is_country_code(value: &Scalar<'_>) -> bool {
    is_country_code_alpha2(value) || is_country_code_alpha3(value) || is_country_code_numeric(value)
}

pub fn is_currency(value: &Scalar<'_>) -> bool {
    value.as_str().is_some_and(codes::is_currency)
}

pub fn is_currency_numeric(value: &Scalar<'_>) -> bool {
    integral(value).is_some_and(codes::is_currency_number)
}

// ─── Digests ────────────────────────────────────────────────────────────────

regex_atom!(is_md4, MD4_RE, r"^[0-9a-fA-F]{32}$");
regex_atom!(is_md5, MD5_RE, r"^[0-9a-fA-F]{32}$");
regex_atom!(is_sha256, SHA256_RE, r"^[0-9a-fA-F]{64}$");
regex_atom!(is_sha384, SHA384_RE, r"^[0-9a-fA-F]{96}$");
regex_atom!(is_sha512, SHA512_RE, r"^[0-9a-fA-F]{128}$");
regex_atom!(is_ripemd128, RIPEMD128_RE, r"^[0-9a-fA-F]{32}$");
regex_atom!(is_ripemd160, RIPEMD160_RE, r"^[0-9a-fA-F]{40}$");
regex_atom!(is_tiger128, TIGER128_RE, r"^[0-9a-fA-F]{32}$");
regex_atom!(is_tiger160, TIGER160_RE, r"^[0-9a-fA-F]{40}$");
regex_atom!(is_tiger192, TIGER192_RE, r"^[0-9a-fA-F]{48}$");

// ─── Identifiers ────────────────────────────────────────────────────────────

regex_atom!(
    is_uuid,
    UUID_RE,
    r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$"
);
regex_atom!(
    is_uuid3,
    UUID3_RE,
    r"^[0-9a-f]{8}-[0-9a-f]{4}-3[0-9a-f]{3}-[0-9a-f]{4}-[0-9a-f]{12}$"
);
regex_atom!(
    is_uuid4,
    UUID4_RE,
    r"^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$"
);
regex_atom!(
    is_uuid5,
    UUID5_RE,
    r"^[0-9a-f]{8}-[0-9a-f]{4}-5[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$"
);
regex_atom!(
    /// Any case, version 1–5, RFC 4122 variant bits.
    is_uuid_rfc4122,
    UUID_RFC4122_RE,
    r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[1-5][0-9a-fA-F]{3}-[89abAB][0-9a-fA-F]{3}-[0-9a-fA-F]{12}$"
);
regex_atom!(
    is_uuid3_rfc4122,
    UUID3_RFC4122_RE,
    r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-3[0-9a-fA-F]{3}-[89abAB][0-9a-fA-F]{3}-[0-9a-fA-F]{12}$"
);
regex_atom!(
    is_uuid4_rfc4122,
    UUID4_RFC4122_RE,
    r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-4[0-9a-fA-F]{3}-[89abAB][0-9a-fA-F]{3}-[0-9a-fA-F]{12}$"
);
regex_atom!(
    is_uuid5_rfc4122,
    UUID5_RFC4122_RE,
    r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-5[0-9a-fA-F]{3}-[89abAB][0-9a-fA-F]{3}-[0-9a-fA-F]{12}$"
);
regex_atom!(
    /// Crockford base32, 26 characters, timestamp not overflowing 48 bits.
    is_ulid,
    ULID_RE,
    r"^[0-7][0-9A-HJKMNP-TV-Za-hjkmnp-tv-z]{25}$"
);
regex_atom!(
    is_cve,
    CVE_RE,
    r"^CVE-(?:1999|2[0-9]{3})-(?:0[0-9]{2}[1-9]|0[0-9][1-9][0-9]|0[1-9][0-9]{2}|[1-9][0-9]{3,})$"
);
regex_atom!(
    is_semver,
    SEMVER_RE,
    r"^(?:0|[1-9][0-9]*)\.(?:0|[1-9][0-9]*)\.(?:0|[1-9][0-9]*)(?:-(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*))*)?(?:\+[0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*)?$"
);

static ISBN10_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{9}[0-9X]$").unwrap());
static ISBN13_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^97[89][0-9]{10}$").unwrap());

fn isbn_digits(value: &Scalar<'_>) -> Option<String> {
    value
        .as_str()
        .map(|s| s.chars().filter(|c| *c != '-' && *c != ' ').collect())
}

/// ISBN-10 with a valid mod-11 check digit; hyphens and spaces are ignored.
pub fn is_isbn10(value: &Scalar<'_>) -> bool {
    let Some(digits) = isbn_digits(value) else {
        return false;
    };
    if !ISBN10_RE.is_match(&digits) {
        return false;
    }
    let sum: u32 = digits
        .bytes()
        .enumerate()
        .map(|(i, b)| {
            let d = if b == b'X' { 10 } else { u32::from(b - b'0') };
            (10 - i as u32) * d
        })
        .sum();
    sum % 11 == 0
}

/// ISBN-13 with a valid mod-10 check digit; hyphens and spaces are ignored.
pub fn is_isbn13(value: &Scalar<'_>) -> bool {
    let Some(digits) = isbn_digits(value) else {
        return false;
    };
    if !ISBN13_RE.is_match(&digits) {
        return false;
    }
    let sum: u32 = digits
        .bytes()
        .enumerate()
        .map(|(i, b)| {
            let d = u32::from(b - b'0');
            if i % 2 == 0 { d } else { d * 3 }
        })
        .sum();
    sum % 10 == 0
}

// ─── Encodings ──────────────────────────────────────────────────────────────

regex_atom!(
    is_base64,
    BASE64_RE,
    r"^(?:[A-Za-z0-9+/]{4})*(?:[A-Za-z0-9+/]{2}==|[A-Za-z0-9+/]{3}=|[A-Za-z0-9+/]{4})$"
);
regex_atom!(
    is_base64_url,
    BASE64_URL_RE,
    r"^(?:[A-Za-z0-9_-]{4})*(?:[A-Za-z0-9_-]{2}==|[A-Za-z0-9_-]{3}=|[A-Za-z0-9_-]{4})$"
);
regex_atom!(
    is_base64_raw_url,
    BASE64_RAW_URL_RE,
    r"^(?:[A-Za-z0-9_-]{4})*[A-Za-z0-9_-]{2,4}$"
);
regex_atom!(is_url_encoded, URL_ENCODED_RE, r"^(?:[^%]|%[0-9A-Fa-f]{2})*$");
regex_atom!(
    /// Contains at least one HTML character reference.
    is_html_encoded,
    HTML_ENCODED_RE,
    r"&#[xX]?[0-9a-fA-F]+;?|&(?:gt|lt|quot|amp|apos|nbsp);?"
);
regex_atom!(
    /// Contains at least one HTML tag.
    is_html,
    HTML_RE,
    r"</?[a-zA-Z][a-zA-Z0-9-]*(?:\s[^>]*)?/?>"
);
regex_atom!(
    is_jwt,
    JWT_RE,
    r"^[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]*$"
);

static DATA_URI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)^data:(?:[a-zA-Z0-9!#$&^_.+-]+/[a-zA-Z0-9!#$&^_.+-]+(?:;[a-zA-Z0-9_.-]+=[a-zA-Z0-9_.%-]+)*)?(;base64)?,(.*)$",
    )
    .unwrap()
});

/// `data:[<media type>][;base64],<data>`; a base64 payload must decode.
pub fn is_data_uri(value: &Scalar<'_>) -> bool {
    let Some(caps) = value.as_str().and_then(|s| DATA_URI_RE.captures(s)) else {
        return false;
    };
    match (caps.get(1), caps.get(2)) {
        (Some(_), Some(payload)) => BASE64_RE.is_match(payload.as_str()),
        _ => true,
    }
}

// ─── Network ────────────────────────────────────────────────────────────────

const MAX_HOSTNAME_LEN: usize = 253;

regex_atom!(
    is_hostname_rfc952,
    HOSTNAME_RFC952_RE,
    r"^[a-zA-Z](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?(?:\.[a-zA-Z](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?)*$"
);

static HOSTNAME_RFC1123_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .unwrap()
});

static FQDN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\.?$",
    )
    .unwrap()
});

/// Labels of up to 63 letters, digits or inner hyphens; 253 characters total.
pub fn is_hostname_rfc1123(value: &Scalar<'_>) -> bool {
    value
        .as_str()
        .is_some_and(|s| s.len() <= MAX_HOSTNAME_LEN && HOSTNAME_RFC1123_RE.is_match(s))
}

/// At least two labels, the last starting with a letter; a trailing dot is
/// allowed.
pub fn is_fqdn(value: &Scalar<'_>) -> bool {
    value
        .as_str()
        .is_some_and(|s| s.len() <= MAX_HOSTNAME_LEN + 1 && FQDN_RE.is_match(s))
}

regex_atom!(
    /// RFC 1035 label: lower case, starts with a letter, at most 63 characters.
    is_dns,
    DNS_RE,
    r"^[a-z](?:[-a-z0-9]{0,61}[a-z0-9])?$"
);
regex_atom!(
    is_mongodb,
    MONGODB_RE,
    r"^mongodb(?:\+srv)?://(?:[^:@/\s]+(?::[^@/\s]*)?@)?[a-zA-Z0-9.-]+(?::[0-9]+)?(?:,[a-zA-Z0-9.-]+(?::[0-9]+)?)*(?:/[a-zA-Z0-9_-]{0,64})?(?:\?[a-zA-Z0-9_]+=[^&\s]*(?:&[a-zA-Z0-9_]+=[^&\s]*)*)?$"
);
regex_atom!(
    is_cron,
    CRON_RE,
    r"^(?:@(?:annually|yearly|monthly|weekly|daily|hourly|reboot)|@every (?:[0-9]+(?:ns|us|µs|ms|s|m|h))+|(?:(?:(?:[0-9]+,)+[0-9]+|(?:\*|[0-9]+)(?:/|-)[0-9]+|[0-9]+|\*) ?){5,7})$"
);

// ─── Geography ──────────────────────────────────────────────────────────────

static LATITUDE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?(?:[1-8]?[0-9](?:\.[0-9]+)?|90(?:\.0+)?)$").unwrap()
});

static LONGITUDE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?(?:180(?:\.0+)?|(?:1[0-7][0-9]|[1-9]?[0-9])(?:\.[0-9]+)?)$").unwrap()
});

pub fn is_latitude(value: &Scalar<'_>) -> bool {
    match value {
        Scalar::Str(s) => LATITUDE_RE.is_match(s),
        other => other.as_f64().is_some_and(|v| (-90.0..=90.0).contains(&v)),
    }
}

pub fn is_longitude(value: &Scalar<'_>) -> bool {
    match value {
        Scalar::Str(s) => LONGITUDE_RE.is_match(s),
        other => other.as_f64().is_some_and(|v| (-180.0..=180.0).contains(&v)),
    }
}

// ─── Cryptocurrency ─────────────────────────────────────────────────────────

regex_atom!(
    /// Legacy base58 P2PKH/P2SH address shape.
    is_btc_address,
    BTC_ADDRESS_RE,
    r"^[13][a-km-zA-HJ-NP-Z1-9]{25,34}$"
);
regex_atom!(
    is_btc_lower_address,
    BTC_LOWER_ADDRESS_RE,
    r"^bc1[02-9ac-hj-np-z]{7,76}$"
);
regex_atom!(
    is_btc_upper_address,
    BTC_UPPER_ADDRESS_RE,
    r"^BC1[02-9AC-HJ-NP-Z]{7,76}$"
);
regex_atom!(is_eth_address, ETH_ADDRESS_RE, r"^0x[0-9a-fA-F]{40}$");
