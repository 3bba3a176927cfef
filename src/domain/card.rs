/// カードエンティティ
///
/// DynamoDBに保存される1枚のグレーディング済みカード。
/// シリアライズ時の属性名はテーブル上の属性名（PK, SK, cardNo など）と一致する。
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::card_id::{CardId, CardKey};

/// ストアから読み取ったカードのJSON表現
///
/// テーブルに保存されている全属性をそのまま保持する。数値は浮動小数点数に変換済み。
pub type CardRecord = Map<String, Value>;

/// グレーディング済みカード
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// パーティションキー
    #[serde(rename = "PK")]
    pub pk: String,
    /// ソートキー
    #[serde(rename = "SK")]
    pub sk: String,
    pub player: String,
    pub year: u16,
    pub brand: String,
    #[serde(rename = "set")]
    pub set_name: String,
    #[serde(rename = "cardNo")]
    pub card_no: String,
    pub grade: String,
    /// 価格（非負の10進数）
    pub price: f64,
    /// 通貨コード（例: USD）
    pub currency: String,
}

impl Card {
    /// 各属性からカードを作成し、複合キーを導出する
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        player: &str,
        year: u16,
        brand: &str,
        set_name: &str,
        card_no: &str,
        grade: &str,
        price: f64,
        currency: &str,
    ) -> Self {
        debug_assert!(
            price.is_finite() && price >= 0.0,
            "price must be a non-negative number: {price}"
        );

        let key = CardId {
            player: player.to_string(),
            year: year.to_string(),
            brand: brand.to_string(),
            set_name: set_name.to_string(),
            card_no: card_no.to_string(),
            grade: grade.to_string(),
        }
        .to_key();

        Self {
            pk: key.partition_key,
            sk: key.sort_key,
            player: player.to_string(),
            year,
            brand: brand.to_string(),
            set_name: set_name.to_string(),
            card_no: card_no.to_string(),
            grade: grade.to_string(),
            price,
            currency: currency.to_string(),
        }
    }

    /// 複合キーを取得
    pub fn key(&self) -> CardKey {
        CardKey {
            partition_key: self.pk.clone(),
            sort_key: self.sk.clone(),
        }
    }

    /// 外部表現のカードID（`player|year|brand|set|cardNo|grade`）
    #[cfg(test)]
    pub fn card_id(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}|{}",
            self.player, self.year, self.brand, self.set_name, self.card_no, self.grade
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card_id::decompose;

    fn ohtani() -> Card {
        Card::new(
            "Shohei Ohtani",
            2018,
            "Bowman Chrome",
            "Prospects",
            "#1",
            "PSA10",
            1599.99,
            "USD",
        )
    }

    #[test]
    fn test_new_derives_keys() {
        let card = ohtani();
        assert_eq!(card.pk, "player#Shohei Ohtani");
        assert_eq!(card.sk, "card#2018#Bowman Chrome#Prospects##1#PSA10");
    }

    /// カードIDを分解したキーとカード自身のキーが一致する
    #[test]
    fn test_card_id_decomposes_to_same_key() {
        let card = ohtani();
        assert_eq!(decompose(&card.card_id()).unwrap(), card.key());
    }

    #[test]
    #[should_panic(expected = "price must be a non-negative number")]
    fn test_new_rejects_negative_price() {
        Card::new("Yu Darvish", 2012, "Topps", "Update", "#US1", "PSA10", -1.0, "USD");
    }

    #[test]
    #[should_panic(expected = "price must be a non-negative number")]
    fn test_new_rejects_nan_price() {
        Card::new("Yu Darvish", 2012, "Topps", "Update", "#US1", "PSA10", f64::NAN, "USD");
    }

    #[test]
    fn test_new_accepts_zero_price() {
        let card = Card::new("Yu Darvish", 2012, "Topps", "Update", "#US1", "PSA10", 0.0, "USD");
        assert_eq!(card.price, 0.0);
    }

    #[test]
    fn test_serialize_uses_table_attribute_names() {
        let value = serde_json::to_value(ohtani()).unwrap();

        assert_eq!(value["PK"], "player#Shohei Ohtani");
        assert_eq!(value["SK"], "card#2018#Bowman Chrome#Prospects##1#PSA10");
        assert_eq!(value["set"], "Prospects");
        assert_eq!(value["cardNo"], "#1");
        assert_eq!(value["year"], 2018);
        assert_eq!(value["price"], 1599.99);
        assert_eq!(value["currency"], "USD");
        assert!(value.get("set_name").is_none());
        assert!(value.get("card_no").is_none());
    }
}
