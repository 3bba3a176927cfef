// シード用の固定カタログ
//
// POST /cards/seed で書き込まれるPSA10カードの一覧。
// PK/SKで上書きされるため、何度書き込んでも件数は変わらない。

use super::card::Card;

/// シード用カタログを生成
pub fn seed_catalog() -> Vec<Card> {
    vec![
        Card::new("Shohei Ohtani", 2018, "Bowman Chrome", "Prospects", "#1", "PSA10", 1599.99, "USD"),
        Card::new("Shohei Ohtani", 2018, "Topps Chrome", "Update", "#HMT1", "PSA10", 899.00, "USD"),
        Card::new("Shohei Ohtani", 2018, "Topps", "Update", "#US1", "PSA10", 349.95, "USD"),
        Card::new("Shohei Ohtani", 2018, "Panini Prizm", "Base", "#1", "PSA10", 420.00, "USD"),
        Card::new("Ichiro Suzuki", 2001, "Topps Chrome", "Base", "#596", "PSA10", 799.00, "USD"),
        Card::new("Ichiro Suzuki", 2001, "Bowman", "Base", "#264", "PSA10", 310.00, "USD"),
        Card::new("Hideki Matsui", 2003, "Topps Chrome", "Base", "#111", "PSA10", 249.50, "USD"),
        Card::new("Hideo Nomo", 1995, "Topps", "Base", "#2", "PSA10", 189.00, "USD"),
        Card::new("Yu Darvish", 2012, "Topps", "Update", "#US1", "PSA10", 120.00, "USD"),
        Card::new("Yoshinobu Yamamoto", 2024, "Topps Chrome", "Base", "#1", "PSA10", 95.00, "USD"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_catalog_has_ten_cards() {
        assert_eq!(seed_catalog().len(), 10);
    }

    /// PK+SKの組はカードごとに一意
    #[test]
    fn test_seed_catalog_keys_are_unique() {
        let catalog = seed_catalog();
        let keys: HashSet<_> = catalog.iter().map(|card| card.key()).collect();
        assert_eq!(keys.len(), catalog.len());
    }

    #[test]
    fn test_seed_catalog_prices_are_non_negative() {
        assert!(seed_catalog().iter().all(|card| card.price >= 0.0));
    }

    #[test]
    fn test_seed_catalog_contains_reference_cards() {
        let ids: Vec<String> = seed_catalog().iter().map(|card| card.card_id()).collect();

        assert!(ids.contains(&"Shohei Ohtani|2018|Bowman Chrome|Prospects|#1|PSA10".to_string()));
        assert!(ids.contains(&"Ichiro Suzuki|2001|Topps Chrome|Base|#596|PSA10".to_string()));
        assert!(ids.contains(&"Hideki Matsui|2003|Topps Chrome|Base|#111|PSA10".to_string()));
        assert!(ids.contains(&"Hideo Nomo|1995|Topps|Base|#2|PSA10".to_string()));
    }

    /// 上位3件の切り詰めを確認できるよう、大谷のカードは3枚より多い
    #[test]
    fn test_seed_catalog_has_more_than_three_ohtani_cards() {
        let count = seed_catalog()
            .iter()
            .filter(|card| card.player == "Shohei Ohtani")
            .count();
        assert!(count > 3);
    }
}
