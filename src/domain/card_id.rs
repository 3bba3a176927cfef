// カードIDとDynamoDBキーの対応付け
//
// 外部表現 `player|year|brand|set|cardNo|grade` を
// パーティションキー `player#<player>` と
// ソートキー `card#<year>#<brand>#<set>#<cardNo>#<grade>` に変換する。

use thiserror::Error;

/// カードIDの区切り文字
pub const CARD_ID_SEPARATOR: char = '|';

/// パーティションキーのプレフィックス
pub const PLAYER_PREFIX: &str = "player#";

/// ソートキーのプレフィックス
pub const CARD_PREFIX: &str = "card#";

/// カードIDのパースエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardIdError {
    /// `|`区切りのセグメント数が6ではない
    #[error("Invalid cardId format. Expected 6 parts separated by '|'.")]
    InvalidSegmentCount(usize),
}

/// DynamoDBの複合キー（PK + SK）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardKey {
    /// パーティションキー（`player#<player>`）
    pub partition_key: String,
    /// ソートキー（`card#<year>#<brand>#<set>#<cardNo>#<grade>`）
    pub sort_key: String,
}

impl CardKey {
    /// 選手名からパーティションキーを生成
    pub fn partition_for_player(player: &str) -> String {
        format!("{PLAYER_PREFIX}{player}")
    }
}

/// `|`区切りのカードIDを分解した6つのセグメント
///
/// 年は文字列のまま保持し、数値かどうかは検証しない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardId {
    pub player: String,
    pub year: String,
    pub brand: String,
    pub set_name: String,
    pub card_no: String,
    pub grade: String,
}

impl CardId {
    /// カードID文字列をパース
    ///
    /// # Arguments
    /// * `identifier` - `player|year|brand|set|cardNo|grade`形式の文字列
    ///
    /// # Returns
    /// * `Ok(CardId)` - セグメント数がちょうど6の場合
    /// * `Err(CardIdError::InvalidSegmentCount)` - それ以外
    pub fn parse(identifier: &str) -> Result<Self, CardIdError> {
        let parts: Vec<&str> = identifier.split(CARD_ID_SEPARATOR).collect();

        match parts.as_slice() {
            [player, year, brand, set_name, card_no, grade] => Ok(Self {
                player: (*player).to_string(),
                year: (*year).to_string(),
                brand: (*brand).to_string(),
                set_name: (*set_name).to_string(),
                card_no: (*card_no).to_string(),
                grade: (*grade).to_string(),
            }),
            _ => Err(CardIdError::InvalidSegmentCount(parts.len())),
        }
    }

    /// DynamoDBの複合キーへ変換
    pub fn to_key(&self) -> CardKey {
        CardKey {
            partition_key: CardKey::partition_for_player(&self.player),
            sort_key: format!(
                "{CARD_PREFIX}{}#{}#{}#{}#{}",
                self.year, self.brand, self.set_name, self.card_no, self.grade
            ),
        }
    }
}

/// カードIDを複合キーに分解する
pub fn decompose(identifier: &str) -> Result<CardKey, CardIdError> {
    CardId::parse(identifier).map(|id| id.to_key())
}

/// URLエンコードされたカードID（パスパラメータ）をデコードする
///
/// UTF-8として不正なバイト列はU+FFFDに置き換える。
pub fn decode_path_identifier(encoded: &str) -> String {
    let bytes = urlencoding::decode_binary(encoded.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose_ohtani_prospect() {
        let key = decompose("Shohei Ohtani|2018|Bowman Chrome|Prospects|#1|PSA10").unwrap();

        assert_eq!(key.partition_key, "player#Shohei Ohtani");
        assert_eq!(key.sort_key, "card#2018#Bowman Chrome#Prospects##1#PSA10");
    }

    #[test]
    fn test_decompose_five_parts_fails() {
        let result = decompose("bad|input|only|four|parts");
        assert_eq!(result, Err(CardIdError::InvalidSegmentCount(5)));
    }

    #[test]
    fn test_decompose_seven_parts_fails() {
        let result = decompose("a|b|c|d|e|f|g");
        assert_eq!(result, Err(CardIdError::InvalidSegmentCount(7)));
    }

    #[test]
    fn test_decompose_without_separator_fails() {
        assert_eq!(
            decompose("Shohei Ohtani"),
            Err(CardIdError::InvalidSegmentCount(1))
        );
        assert_eq!(decompose(""), Err(CardIdError::InvalidSegmentCount(1)));
    }

    /// 年が数値でなくても、空のセグメントがあっても分解できる
    #[test]
    fn test_decompose_does_not_validate_segments() {
        let key = decompose("Player|not-a-year|||x|").unwrap();

        assert_eq!(key.partition_key, "player#Player");
        assert_eq!(key.sort_key, "card#not-a-year###x#");
    }

    #[test]
    fn test_decompose_is_deterministic() {
        let id = "Ichiro Suzuki|2001|Topps Chrome|Base|#596|PSA10";
        assert_eq!(decompose(id), decompose(id));
    }

    #[test]
    fn test_decompose_matches_field_concatenation() {
        let fields = [
            ("Hideo Nomo", "1995", "Topps", "Base", "#2", "PSA10"),
            ("Yu Darvish", "2012", "Topps", "Update", "#US1", "PSA9"),
            ("A", "B", "C", "D", "E", "F"),
        ];

        for (p, y, b, s, n, g) in fields {
            let key = decompose(&format!("{p}|{y}|{b}|{s}|{n}|{g}")).unwrap();
            assert_eq!(key.partition_key, format!("player#{p}"));
            assert_eq!(key.sort_key, format!("card#{y}#{b}#{s}#{n}#{g}"));
        }
    }

    #[test]
    fn test_parse_exposes_named_segments() {
        let id = CardId::parse("Hideki Matsui|2003|Topps Chrome|Base|#111|PSA10").unwrap();

        assert_eq!(id.player, "Hideki Matsui");
        assert_eq!(id.year, "2003");
        assert_eq!(id.brand, "Topps Chrome");
        assert_eq!(id.set_name, "Base");
        assert_eq!(id.card_no, "#111");
        assert_eq!(id.grade, "PSA10");
    }

    #[test]
    fn test_partition_for_player() {
        assert_eq!(
            CardKey::partition_for_player("Shohei Ohtani"),
            "player#Shohei Ohtani"
        );
    }

    #[test]
    fn test_decode_path_identifier() {
        let decoded =
            decode_path_identifier("Shohei%20Ohtani%7C2018%7CBowman%20Chrome%7CProspects%7C%231%7CPSA10");
        assert_eq!(decoded, "Shohei Ohtani|2018|Bowman Chrome|Prospects|#1|PSA10");
    }

    /// エンコードされていない値はそのまま
    #[test]
    fn test_decode_path_identifier_plain() {
        assert_eq!(
            decode_path_identifier("Hideo Nomo|1995|Topps|Base|#2|PSA10"),
            "Hideo Nomo|1995|Topps|Base|#2|PSA10"
        );
        // '+'は空白に変換しない
        assert_eq!(decode_path_identifier("A+B"), "A+B");
    }

    /// 不正なUTF-8は置換文字になり、キー変換はセグメント数だけで判定される
    #[test]
    fn test_decode_path_identifier_invalid_utf8_is_replaced() {
        assert_eq!(decode_path_identifier("%FF%FE"), "\u{FFFD}\u{FFFD}");

        let decoded = decode_path_identifier("Ichiro%FF|2001|Topps Chrome|Base|#596|PSA10");
        assert_eq!(decoded, "Ichiro\u{FFFD}|2001|Topps Chrome|Base|#596|PSA10");

        let key = decompose(&decoded).unwrap();
        assert_eq!(key.partition_key, "player#Ichiro\u{FFFD}");

        assert_eq!(
            decompose(&decode_path_identifier("%FF%7Conly%7Ctwo")),
            Err(CardIdError::InvalidSegmentCount(3))
        );
    }

    #[test]
    fn test_card_id_error_display() {
        let error = CardIdError::InvalidSegmentCount(4);
        assert_eq!(
            error.to_string(),
            "Invalid cardId format. Expected 6 parts separated by '|'."
        );
    }
}
