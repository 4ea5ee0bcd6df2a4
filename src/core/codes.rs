//! Code tables for the enumerated BMECat header and product fields.
//!
//! Every table maps between a closed enum and its canonical code string.
//! Decoding is total: an unrecognized code yields the `Unknown` sentinel
//! instead of failing. Encoding is total for every non-`Unknown` variant;
//! the encoder never emits `Unknown` (it either omits the element or
//! rejects the catalog, depending on whether the field is optional).

use serde::{Deserialize, Serialize};

/// ISO 639-2/T language codes (lowercase), as used in `LANGUAGE`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// deu — German.
    German,
    /// eng — English.
    English,
    /// fra — French.
    French,
    /// ita — Italian.
    Italian,
    /// spa — Spanish.
    Spanish,
    /// nld — Dutch.
    Dutch,
    /// pol — Polish.
    Polish,
    /// por — Portuguese.
    Portuguese,
    /// ces — Czech.
    Czech,
    /// dan — Danish.
    Danish,
    /// swe — Swedish.
    Swedish,
    /// fin — Finnish.
    Finnish,
    /// hun — Hungarian.
    Hungarian,
    /// rus — Russian.
    Russian,
    /// tur — Turkish.
    Turkish,
    /// Unmapped code.
    #[default]
    Unknown,
}

impl Language {
    /// Canonical ISO 639-2/T code; `""` for `Unknown`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::German => "deu",
            Self::English => "eng",
            Self::French => "fra",
            Self::Italian => "ita",
            Self::Spanish => "spa",
            Self::Dutch => "nld",
            Self::Polish => "pol",
            Self::Portuguese => "por",
            Self::Czech => "ces",
            Self::Danish => "dan",
            Self::Swedish => "swe",
            Self::Finnish => "fin",
            Self::Hungarian => "hun",
            Self::Russian => "rus",
            Self::Turkish => "tur",
            Self::Unknown => "",
        }
    }

    /// Parse from a code string; unmapped input yields `Unknown`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "deu" => Self::German,
            "eng" => Self::English,
            "fra" => Self::French,
            "ita" => Self::Italian,
            "spa" => Self::Spanish,
            "nld" => Self::Dutch,
            "pol" => Self::Polish,
            "por" => Self::Portuguese,
            "ces" => Self::Czech,
            "dan" => Self::Danish,
            "swe" => Self::Swedish,
            "fin" => Self::Finnish,
            "hun" => Self::Hungarian,
            "rus" => Self::Russian,
            "tur" => Self::Turkish,
            _ => Self::Unknown,
        }
    }
}

/// ISO 4217 currency codes, as used in `CURRENCY` and `PRICE_CURRENCY`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// EUR — Euro.
    Eur,
    /// USD — US Dollar.
    Usd,
    /// GBP — Pound Sterling.
    Gbp,
    /// CHF — Swiss Franc.
    Chf,
    /// JPY — Japanese Yen.
    Jpy,
    /// SEK — Swedish Krona.
    Sek,
    /// NOK — Norwegian Krone.
    Nok,
    /// DKK — Danish Krone.
    Dkk,
    /// PLN — Polish Zloty.
    Pln,
    /// CZK — Czech Koruna.
    Czk,
    /// HUF — Hungarian Forint.
    Huf,
    /// CAD — Canadian Dollar.
    Cad,
    /// AUD — Australian Dollar.
    Aud,
    /// CNY — Chinese Yuan.
    Cny,
    /// TRY — Turkish Lira.
    Try,
    /// Unmapped code.
    #[default]
    Unknown,
}

impl Currency {
    /// Canonical ISO 4217 code; `""` for `Unknown`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Eur => "EUR",
            Self::Usd => "USD",
            Self::Gbp => "GBP",
            Self::Chf => "CHF",
            Self::Jpy => "JPY",
            Self::Sek => "SEK",
            Self::Nok => "NOK",
            Self::Dkk => "DKK",
            Self::Pln => "PLN",
            Self::Czk => "CZK",
            Self::Huf => "HUF",
            Self::Cad => "CAD",
            Self::Aud => "AUD",
            Self::Cny => "CNY",
            Self::Try => "TRY",
            Self::Unknown => "",
        }
    }

    /// Parse from a code string; unmapped input yields `Unknown`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "EUR" => Self::Eur,
            "USD" => Self::Usd,
            "GBP" => Self::Gbp,
            "CHF" => Self::Chf,
            "JPY" => Self::Jpy,
            "SEK" => Self::Sek,
            "NOK" => Self::Nok,
            "DKK" => Self::Dkk,
            "PLN" => Self::Pln,
            "CZK" => Self::Czk,
            "HUF" => Self::Huf,
            "CAD" => Self::Cad,
            "AUD" => Self::Aud,
            "CNY" => Self::Cny,
            "TRY" => Self::Try,
            _ => Self::Unknown,
        }
    }
}

/// UN/CEFACT Rec 20 unit codes used for `ORDER_UNIT` and `CONTENT_UNIT`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuantityUnit {
    /// C62 — One (piece).
    Piece,
    /// PK — Pack.
    Pack,
    /// BX — Box.
    Box,
    /// CT — Carton.
    Carton,
    /// PR — Pair.
    Pair,
    /// SET — Set.
    Set,
    /// DZN — Dozen.
    Dozen,
    /// RO — Roll.
    Roll,
    /// GRM — Gram.
    Gram,
    /// KGM — Kilogram.
    Kilogram,
    /// TNE — Tonne.
    Tonne,
    /// MLT — Millilitre.
    Millilitre,
    /// LTR — Litre.
    Litre,
    /// MMT — Millimetre.
    Millimetre,
    /// CMT — Centimetre.
    Centimetre,
    /// MTR — Metre.
    Metre,
    /// MTK — Square metre.
    SquareMetre,
    /// MTQ — Cubic metre.
    CubicMetre,
    /// HUR — Hour.
    Hour,
    /// DAY — Day.
    Day,
    /// Unmapped code.
    #[default]
    Unknown,
}

impl QuantityUnit {
    /// Canonical Rec 20 code; `""` for `Unknown`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Piece => "C62",
            Self::Pack => "PK",
            Self::Box => "BX",
            Self::Carton => "CT",
            Self::Pair => "PR",
            Self::Set => "SET",
            Self::Dozen => "DZN",
            Self::Roll => "RO",
            Self::Gram => "GRM",
            Self::Kilogram => "KGM",
            Self::Tonne => "TNE",
            Self::Millilitre => "MLT",
            Self::Litre => "LTR",
            Self::Millimetre => "MMT",
            Self::Centimetre => "CMT",
            Self::Metre => "MTR",
            Self::SquareMetre => "MTK",
            Self::CubicMetre => "MTQ",
            Self::Hour => "HUR",
            Self::Day => "DAY",
            Self::Unknown => "",
        }
    }

    /// Parse from a code string; unmapped input yields `Unknown`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "C62" => Self::Piece,
            "PK" => Self::Pack,
            "BX" => Self::Box,
            "CT" => Self::Carton,
            "PR" => Self::Pair,
            "SET" => Self::Set,
            "DZN" => Self::Dozen,
            "RO" => Self::Roll,
            "GRM" => Self::Gram,
            "KGM" => Self::Kilogram,
            "TNE" => Self::Tonne,
            "MLT" => Self::Millilitre,
            "LTR" => Self::Litre,
            "MMT" => Self::Millimetre,
            "CMT" => Self::Centimetre,
            "MTR" => Self::Metre,
            "MTK" => Self::SquareMetre,
            "MTQ" => Self::CubicMetre,
            "HUR" => Self::Hour,
            "DAY" => Self::Day,
            _ => Self::Unknown,
        }
    }
}

/// Incoterms 2020 delivery-term codes, as used in `TRANSPORT/INCOTERM`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Incoterm {
    /// EXW — Ex Works.
    Exw,
    /// FCA — Free Carrier.
    Fca,
    /// FAS — Free Alongside Ship.
    Fas,
    /// FOB — Free On Board.
    Fob,
    /// CFR — Cost and Freight.
    Cfr,
    /// CIF — Cost, Insurance and Freight.
    Cif,
    /// CPT — Carriage Paid To.
    Cpt,
    /// CIP — Carriage and Insurance Paid To.
    Cip,
    /// DAP — Delivered At Place.
    Dap,
    /// DPU — Delivered at Place Unloaded.
    Dpu,
    /// DDP — Delivered Duty Paid.
    Ddp,
    /// Unmapped code.
    #[default]
    Unknown,
}

impl Incoterm {
    /// Canonical three-letter code; `""` for `Unknown`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Exw => "EXW",
            Self::Fca => "FCA",
            Self::Fas => "FAS",
            Self::Fob => "FOB",
            Self::Cfr => "CFR",
            Self::Cif => "CIF",
            Self::Cpt => "CPT",
            Self::Cip => "CIP",
            Self::Dap => "DAP",
            Self::Dpu => "DPU",
            Self::Ddp => "DDP",
            Self::Unknown => "",
        }
    }

    /// Parse from a code string; unmapped input yields `Unknown`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "EXW" => Self::Exw,
            "FCA" => Self::Fca,
            "FAS" => Self::Fas,
            "FOB" => Self::Fob,
            "CFR" => Self::Cfr,
            "CIF" => Self::Cif,
            "CPT" => Self::Cpt,
            "CIP" => Self::Cip,
            "DAP" => Self::Dap,
            "DPU" => Self::Dpu,
            "DDP" => Self::Ddp,
            _ => Self::Unknown,
        }
    }
}
