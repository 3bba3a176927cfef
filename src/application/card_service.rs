/// カードサービス
///
/// リポジトリの上で一覧・ID指定取得・選手別上位3件・シードの各操作を提供する。
/// 入力検証のエラーはCardApiErrorの種別として返す。
use tracing::info;

use crate::domain::{
    CardKey, CardRecord, TOP_CARDS_LIMIT, decompose, seed_catalog, top_by_price,
};
use crate::infrastructure::CardRepository;

use super::error::CardApiError;

/// top3で必須のクエリパラメータ名
pub const PLAYER_PARAM: &str = "player";

/// カード操作を提供するサービス
pub struct CardService<R>
where
    R: CardRepository,
{
    /// カードリポジトリ
    repository: R,
}

impl<R> CardService<R>
where
    R: CardRepository,
{
    /// 新しいCardServiceを作成
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// 全カードを取得
    pub async fn list_all(&self) -> Result<Vec<CardRecord>, CardApiError> {
        let records = self.repository.list_all().await?;
        info!(count = records.len(), "全カード取得");
        Ok(records)
    }

    /// cardIdでカードを取得
    ///
    /// # 引数
    /// * `card_id` - デコード済みの`player|year|brand|set|cardNo|grade`
    ///
    /// # 戻り値
    /// * 形式不正は`InvalidIdentifier`、存在しない場合は`NotFound`
    pub async fn get_by_id(&self, card_id: &str) -> Result<CardRecord, CardApiError> {
        let key = decompose(card_id)?;

        match self.repository.get(&key).await? {
            Some(record) => Ok(record),
            None => {
                info!(card_id = card_id, "カードが見つからない");
                Err(CardApiError::NotFound)
            }
        }
    }

    /// 選手のカードを価格の降順で最大3件取得
    ///
    /// `player`が未指定または空文字の場合は`MissingParameter`。
    pub async fn top3(&self, player: Option<&str>) -> Result<Vec<CardRecord>, CardApiError> {
        let player = player
            .filter(|p| !p.is_empty())
            .ok_or(CardApiError::MissingParameter(PLAYER_PARAM))?;

        let partition_key = CardKey::partition_for_player(player);
        let records = self.repository.query_partition(&partition_key).await?;
        let matched = records.len();

        let top = top_by_price(records, TOP_CARDS_LIMIT);
        info!(player = player, matched = matched, returned = top.len(), "上位カード取得");

        Ok(top)
    }

    /// 固定カタログを書き込む
    ///
    /// # 戻り値
    /// * 書き込んだ件数
    pub async fn seed(&self) -> Result<usize, CardApiError> {
        let catalog = seed_catalog();
        let count = self.repository.put_batch(&catalog).await?;
        info!(count = count, "シード完了");
        Ok(count)
    }
}
