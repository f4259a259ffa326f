//! ISO 3166-1 country codes and ISO 4217 currency codes as compile-time
//! tables.

/// One ISO 3166-1 entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Country {
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    pub numeric: u16,
}

macro_rules! countries {
    ($($a2:literal $a3:literal $num:literal),* $(,)?) => {
        &[$(Country { alpha2: $a2, alpha3: $a3, numeric: $num }),*]
    };
}

pub static COUNTRIES: &[Country] = countries![
    "AF" "AFG" 4, "AX" "ALA" 248, "AL" "ALB" 8, "DZ" "DZA" 12, "AS" "ASM" 16,
    "AD" "AND" 20, "AO" "AGO" 24, "AI" "AIA" 660, "AQ" "ATA" 10, "AG" "ATG" 28,
    "AR" "ARG" 32, "AM" "ARM" 51, "AW" "ABW" 533, "AU" "AUS" 36, "AT" "AUT" 40,
    "AZ" "AZE" 31, "BS" "BHS" 44, "BH" "BHR" 48, "BD" "BGD" 50, "BB" "BRB" 52,
    "BY" "BLR" 112, "BE" "BEL" 56, "BZ" "BLZ" 84, "BJ" "BEN" 204, "BM" "BMU" 60,
    "BT" "BTN" 64, "BO" "BOL" 68, "BQ" "BES" 535, "BA" "BIH" 70, "BW" "BWA" 72,
    "BV" "BVT" 74, "BR" "BRA" 76, "IO" "IOT" 86, "BN" "BRN" 96, "BG" "BGR" 100,
    "BF" "BFA" 854, "BI" "BDI" 108, "CV" "CPV" 132, "KH" "KHM" 116, "CM" "CMR" 120,
    "CA" "CAN" 124, "KY" "CYM" 136, "CF" "CAF" 140, "TD" "TCD" 148, "CL" "CHL" 152,
    "CN" "CHN" 156, "CX" "CXR" 162, "CC" "CCK" 166, "CO" "COL" 170, "KM" "COM" 174,
    "CG" "COG" 178, "CD" "COD" 180, "CK" "COK" 184, "CR" "CRI" 188, "CI" "CIV" 384,
    "HR" "HRV" 191, "CU" "CUB" 192, "CW" "CUW" 531, "CY" "CYP" 196, "CZ" "CZE" 203,
    "DK" "DNK" 208, "DJ" "DJI" 262, "DM" "DMA" 212, "DO" "DOM" 214, "EC" "ECU" 218,
    "EG" "EGY" 818, "SV" "SLV" 222, "GQ" "GNQ" 226, "ER" "ERI" 232, "EE" "EST" 233,
    "SZ" "SWZ" 748, "ET" "ETH" 231, "FK" "FLK" 238, "FO" "FRO" 234, "FJ" "FJI" 242,
    "FI" "FIN" 246, "FR" "FRA" 250, "GF" "GUF" 254, "PF" "PYF" 258, "TF" "ATF" 260,
    "GA" "GAB" 266, "GM" "GMB" 270, "GE" "GEO" 268, "DE" "DEU" 276, "GH" "GHA" 288,
    "GI" "GIB" 292, "GR" "GRC" 300, "GL" "GRL" 304, "GD" "GRD" 308, "GP" "GLP" 312,
    "GU" "GUM" 316, "GT" "GTM" 320, "GG" "GGY" 831, "GN" "GIN" 324, "GW" "GNB" 624,
    "GY" "GUY" 328, "HT" "HTI" 332, "HM" "HMD" 334, "VA" "VAT" 336, "HN" "HND" 340,
    "HK" "HKG" 344, "HU" "HUN" 348, "IS" "ISL" 352, "IN" "IND" 356, "ID" "IDN" 360,
    "IR" "IRN" 364, "IQ" "IRQ" 368, "IE" "IRL" 372, "IM" "IMN" 833, "IL" "ISR" 376,
    "IT" "ITA" 380, "JM" "JAM" 388, "JP" "JPN" 392, "JE" "JEY" 832, "JO" "JOR" 400,
    "KZ" "KAZ" 398, "KE" "KEN" 404, "KI" "KIR" 296, "KP" "PRK" 408, "KR" "KOR" 410,
    "KW" "KWT" 414, "KG" "KGZ" 417, "LA" "LAO" 418, "LV" "LVA" 428, "LB" "LBN" 422,
    "LS" "LSO" 426, "LR" "LBR" 430, "LY" "LBY" 434, "LI" "LIE" 438, "LT" "LTU" 440,
    "LU" "LUX" 442, "MO" "MAC" 446, "MG" "MDG" 450, "MW" "MWI" 454, "MY" "MYS" 458,
    "MV" "MDV" 462, "ML" "MLI" 466, "MT" "MLT" 470, "MH" "MHL" 584, "MQ" "MTQ" 474,
    "MR" "MRT" 478, "MU" "MUS" 480, "YT" "MYT" 175, "MX" "MEX" 484, "FM" "FSM" 583,
    "MD" "MDA" 498, "MC" "MCO" 492, "MN" "MNG" 496, "ME" "MNE" 499, "MS" "MSR" 500,
    "MA" "MAR" 504, "MZ" "MOZ" 508, "MM" "MMR" 104, "NA" "NAM" 516, "NR" "NRU" 520,
    "NP" "NPL" 524, "NL" "NLD" 528, "NC" "NCL" 540, "NZ" "NZL" 554, "NI" "NIC" 558,
    "NE" "NER" 562, "NG" "NGA" 566, "NU" "NIU" 570, "NF" "NFK" 574, "MK" "MKD" 807,
    "MP" "MNP" 580, "NO" "NOR" 578, "OM" "OMN" 512, "PK" "PAK" 586, "PW" "PLW" 585,
    "PS" "PSE" 275, "PA" "PAN" 591, "PG" "PNG" 598, "PY" "PRY" 600, "PE" "PER" 604,
    "PH" "PHL" 608, "PN" "PCN" 612, "PL" "POL" 616, "PT" "PRT" 620, "PR" "PRI" 630,
    "QA" "QAT" 634, "RE" "REU" 638, "RO" "ROU" 642, "RU" "RUS" 643, "RW" "RWA" 646,
    "BL" "BLM" 652, "SH" "SHN" 654, "KN" "KNA" 659, "LC" "LCA" 662, "MF" "MAF" 663,
    "PM" "SPM" 666, "VC" "VCT" 670, "WS" "WSM" 882, "SM" "SMR" 674, "ST" "STP" 678,
    "SA" "SAU" 682, "SN" "SEN" 686, "RS" "SRB" 688, "SC" "SYC" 690, "SL" "SLE" 694,
    "SG" "SGP" 702, "SX" "SXM" 534, "SK" "SVK" 703, "SI" "SVN" 705, "SB" "SLB" 90,
    "SO" "SOM" 706, "ZA" "ZAF" 710, "GS" "SGS" 239, "SS" "SSD" 728, "ES" "ESP" 724,
    "LK" "LKA" 144, "SD" "SDN" 729, "SR" "SUR" 740, "SJ" "SJM" 744, "SE" "SWE" 752,
    "CH" "CHE" 756, "SY" "SYR" 760, "TW" "TWN" 158, "TJ" "TJK" 762, "TZ" "TZA" 834,
    "TH" "THA" 764, "TL" "TLS" 626, "TG" "TGO" 768, "TK" "TKL" 772, "TO" "TON" 776,
    "TT" "TTO" 780, "TN" "TUN" 788, "TR" "TUR" 792, "TM" "TKM" 795, "TC" "TCA" 796,
    "TV" "TUV" 798, "UG" "UGA" 800, "UA" "UKR" 804, "AE" "ARE" 784, "GB" "GBR" 826,
    "US" "USA" 840, "UM" "UMI" 581, "UY" "URY" 858, "UZ" "UZB" 860, "VU" "VUT" 548,
    "VE" "VEN" 862, "VN" "VNM" 704, "VG" "VGB" 92, "VI" "VIR" 850, "WF" "WLF" 876,
    "EH" "ESH" 732, "YE" "YEM" 887, "ZM" "ZMB" 894, "ZW" "ZWE" 716,
];

/// ISO 4217 alphabetic currency codes.
pub static CURRENCIES: &[&str] = &[
    "AFN", "EUR", "ALL", "DZD", "USD", "AOA", "XCD", "ARS", "AMD", "AWG", "AUD", "AZN", "BSD",
    "BHD", "BDT", "BBD", "BYN", "BZD", "XOF", "BMD", "INR", "BTN", "BOB", "BOV", "BAM", "BWP",
    "NOK", "BRL", "BND", "BGN", "BIF", "CVE", "KHR", "XAF", "CAD", "KYD", "CLP", "CLF", "CNY",
    "COP", "COU", "KMF", "CDF", "NZD", "CRC", "HRK", "CUP", "CUC", "ANG", "CZK", "DKK", "DJF",
    "DOP", "EGP", "SVC", "ERN", "SZL", "ETB", "FKP", "FJD", "XPF", "GMD", "GEL", "GHS", "GIP",
    "GTQ", "GBP", "GNF", "GYD", "HTG", "HNL", "HKD", "HUF", "ISK", "IDR", "XDR", "IRR", "IQD",
    "ILS", "JMD", "JPY", "JOD", "KZT", "KES", "KPW", "KRW", "KWD", "KGS", "LAK", "LBP", "LSL",
    "ZAR", "LRD", "LYD", "CHF", "MOP", "MKD", "MGA", "MWK", "MYR", "MVR", "MRU", "MUR", "XUA",
    "MXN", "MXV", "MDL", "MNT", "MAD", "MZN", "MMK", "NAD", "NPR", "NIO", "NGN", "OMR", "PKR",
    "PAB", "PGK", "PYG", "PEN", "PHP", "PLN", "QAR", "RON", "RUB", "RWF", "SHP", "WST", "STN",
    "SAR", "RSD", "SCR", "SLL", "SGD", "XSU", "SBD", "SOS", "SSP", "LKR", "SDG", "SRD", "SEK",
    "CHE", "CHW", "SYP", "TWD", "TJS", "TZS", "THB", "TOP", "TTD", "TND", "TRY", "TMT", "UGX",
    "UAH", "AED", "USN", "UYU", "UYI", "UYW", "UZS", "VUV", "VES", "VND", "YER", "ZMW", "ZWL",
    "XBA", "XBB", "XBC", "XBD", "XTS", "XXX", "XAU", "XPD", "XPT", "XAG",
];

/// ISO 4217 numeric currency codes.
pub static CURRENCY_NUMBERS: &[u16] = &[
    8, 12, 32, 36, 44, 48, 50, 51, 52, 60, 64, 68, 72, 84, 90, 96, 104, 108, 116, 124, 132, 136,
    144, 152, 156, 170, 174, 188, 191, 192, 203, 208, 214, 222, 230, 232, 238, 242, 262, 270,
    292, 320, 324, 328, 332, 340, 344, 348, 352, 356, 360, 364, 368, 376, 388, 392, 398, 400,
    404, 408, 410, 414, 417, 418, 422, 426, 430, 434, 446, 454, 458, 462, 480, 484, 496, 498,
    504, 512, 516, 524, 532, 533, 548, 554, 558, 566, 578, 586, 590, 598, 600, 604, 608, 634,
    643, 646, 654, 682, 690, 694, 702, 704, 706, 710, 728, 748, 752, 756, 760, 764, 776, 780,
    784, 788, 800, 807, 818, 826, 834, 840, 858, 860, 882, 886, 901, 927, 928, 929, 930, 931,
    932, 933, 934, 936, 938, 940, 941, 943, 944, 946, 947, 948, 949, 950, 951, 952, 953, 955,
    956, 957, 958, 959, 960, 961, 962, 963, 964, 965, 967, 968, 969, 970, 971, 972, 973, 975,
    976, 977, 978, 979, 980, 981, 984, 985, 986, 990, 994, 997, 999,
];

pub fn is_alpha2(code: &str) -> bool {
    COUNTRIES.iter().any(|c| c.alpha2.eq_ignore_ascii_case(code))
}

pub fn is_alpha3(code: &str) -> bool {
    COUNTRIES.iter().any(|c| c.alpha3.eq_ignore_ascii_case(code))
}

pub fn is_country_number(code: i64) -> bool {
    COUNTRIES.iter().any(|c| i64::from(c.numeric) == code)
}

pub fn is_currency(code: &str) -> bool {
    CURRENCIES.contains(&code)
}

pub fn is_currency_number(code: i64) -> bool {
    CURRENCY_NUMBERS.iter().any(|n| i64::from(*n) == code)
}
