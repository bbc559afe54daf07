use std::collections::BTreeMap;

const DEFAULT_SYMBOLS: [(&str, &str); 10] = [
    ("GBP", "£"),
    ("USD", "$"),
    ("EUR", "€"),
    ("JPY", "¥"),
    ("CAD", "C$"),
    ("AUD", "A$"),
    ("CHF", "CHF "),
    ("SEK", "kr"),
    ("NOK", "kr"),
    ("DKK", "kr"),
];

/// Maps currency codes to display symbols. Codes are matched exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyTable {
    symbols: BTreeMap<String, String>,
}

impl Default for CurrencyTable {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_SYMBOLS)
    }
}

impl CurrencyTable {
    pub fn from_pairs<I, C, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (C, S)>,
        C: Into<String>,
        S: Into<String>,
    {
        Self {
            symbols: pairs
                .into_iter()
                .map(|(code, symbol)| (code.into(), symbol.into()))
                .collect(),
        }
    }

    /// Symbol for `code`, or `"<code> "` when the code is unknown.
    pub fn symbol(&self, code: &str) -> String {
        match self.symbols.get(code) {
            Some(symbol) => symbol.clone(),
            None => format!("{code} "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_resolves_known_codes() {
        let table = CurrencyTable::default();
        assert_eq!(table.symbol("GBP"), "£");
        assert_eq!(table.symbol("USD"), "$");
        assert_eq!(table.symbol("CHF"), "CHF ");
        assert_eq!(table.symbol("NOK"), "kr");
        assert_eq!(table, CurrencyTable::from_pairs(DEFAULT_SYMBOLS));
    }

    #[test]
    fn unknown_code_falls_back_to_code_and_space() {
        let table = CurrencyTable::default();
        assert_eq!(table.symbol("NZD"), "NZD ");
        assert_eq!(table.symbol("usd"), "usd ");
    }

    #[test]
    fn custom_table_replaces_defaults() {
        let table = CurrencyTable::from_pairs([("NZD", "NZ$")]);
        assert_eq!(table.symbol("NZD"), "NZ$");
        assert_eq!(table.symbol("USD"), "USD ");
    }
}
