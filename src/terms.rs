// SPDX-License-Identifier: MPL-2.0
//! Static maps from backend vocabulary to translation keys.
//!
//! The validator backend reports yaku and score tiers as plain strings.
//! These maps tie that vocabulary to translation keys; terms are matched
//! exactly and case-sensitively, as opaque identifiers. The maps are
//! partial on purpose: a term the backend adds later simply misses here
//! and the caller falls back to the raw string.

use crate::catalog::TranslationKey;

/// Mapping from an external vocabulary string to a translation key.
#[derive(Debug, Clone, Copy)]
pub struct TermMap {
    entries: &'static [(&'static str, TranslationKey)],
}

impl TermMap {
    pub const fn new(entries: &'static [(&'static str, TranslationKey)]) -> Self {
        Self { entries }
    }

    /// Exact-match lookup; `None` for unknown terms.
    pub fn key_for(&self, term: &str) -> Option<TranslationKey> {
        self.entries
            .iter()
            .find(|(backend, _)| *backend == term)
            .map(|&(_, key)| key)
    }

    pub fn entries(&self) -> &'static [(&'static str, TranslationKey)] {
        self.entries
    }
}

/// Rule (yaku) names as emitted by the validator backend.
pub static YAKU_TERMS: TermMap = TermMap::new(&[
    ("Riichi", TranslationKey::YakuRiichi),
    ("Ippatsu", TranslationKey::YakuIppatsu),
    ("Menzen Tsumo", TranslationKey::YakuMenzenTsumo),
    ("Tanyao (All Simples)", TranslationKey::YakuTanyao),
    ("Pinfu", TranslationKey::YakuPinfu),
    ("Iipeikou (Pure Double Sequence)", TranslationKey::YakuIipeikou),
    ("Yakuhai: East Wind", TranslationKey::YakuYakuhaiEast),
    ("Yakuhai: South Wind", TranslationKey::YakuYakuhaiSouth),
    ("Yakuhai: West Wind", TranslationKey::YakuYakuhaiWest),
    ("Yakuhai: North Wind", TranslationKey::YakuYakuhaiNorth),
    ("Yakuhai: White Dragon (Haku)", TranslationKey::YakuYakuhaiWhite),
    ("Yakuhai: Green Dragon (Hatsu)", TranslationKey::YakuYakuhaiGreen),
    ("Yakuhai: Red Dragon (Chun)", TranslationKey::YakuYakuhaiRed),
    ("Rinshan Kaihou (After Kan)", TranslationKey::YakuRinshanKaihou),
    ("Chankan (Robbing the Kan)", TranslationKey::YakuChankan),
    ("Haitei Raoyue (Last Tile Draw)", TranslationKey::YakuHaitei),
    ("Houtei Raoyui (Last Tile Discard)", TranslationKey::YakuHoutei),
    ("Double Riichi", TranslationKey::YakuDoubleRiichi),
    ("Toitoi (All Triplets)", TranslationKey::YakuToitoi),
    ("Sanshoku Doujun (Mixed Triple Sequence)", TranslationKey::YakuSanshokuDoujun),
    ("Sanshoku Doukou (Triple Triplets)", TranslationKey::YakuSanshokuDoukou),
    ("Ittsu (Pure Straight)", TranslationKey::YakuIttsu),
    ("Chiitoitsu (Seven Pairs)", TranslationKey::YakuChiitoitsu),
    ("Chanta (Outside Hand)", TranslationKey::YakuChanta),
    ("San Ankou (Three Concealed Triplets)", TranslationKey::YakuSanAnkou),
    ("San Kantsu (Three Kans)", TranslationKey::YakuSanKantsu),
    ("Honroutou (All Terminals and Honors)", TranslationKey::YakuHonroutou),
    ("Shousangen (Little Three Dragons)", TranslationKey::YakuShousangen),
    ("Honitsu (Half Flush)", TranslationKey::YakuHonitsu),
    ("Junchan (Terminals in All Groups)", TranslationKey::YakuJunchan),
    ("Ryanpeikou (Twice Pure Double Sequence)", TranslationKey::YakuRyanpeikou),
    ("Chinitsu (Full Flush)", TranslationKey::YakuChinitsu),
    ("Tenhou (Heavenly Hand)", TranslationKey::YakuTenhou),
    ("Chiihou (Earthly Hand)", TranslationKey::YakuChiihou),
    ("Kokushi Musou (Thirteen Orphans)", TranslationKey::YakuKokushiMusou),
    ("Suuankou (Four Concealed Triplets)", TranslationKey::YakuSuuankou),
    ("Daisangen (Big Three Dragons)", TranslationKey::YakuDaisangen),
    ("Shousuushii (Little Four Winds)", TranslationKey::YakuShousuushii),
    ("Daisuushii (Big Four Winds)", TranslationKey::YakuDaisuushii),
    ("Tsuuiisou (All Honors)", TranslationKey::YakuTsuuiisou),
    ("Chinroutou (All Terminals)", TranslationKey::YakuChinroutou),
    ("Ryuuiisou (All Green)", TranslationKey::YakuRyuuiisou),
    ("Chuuren Poutou (Nine Gates)", TranslationKey::YakuChuurenPoutou),
    ("Kokushi Juusanmen (Kokushi Musou 13-wait)", TranslationKey::YakuKokushiJuusanmen),
    ("Suuankou Tanki", TranslationKey::YakuSuuankouTanki),
    ("Junsei Chuuren Poutou", TranslationKey::YakuJunseiChuurenPoutou),
    ("Suu Kantsu (Four Kans)", TranslationKey::YakuSuuKantsu),
]);

/// Score-tier names as emitted by the validator backend.
pub static SCORE_TIER_TERMS: TermMap = TermMap::new(&[
    ("Mangan", TranslationKey::ScoreMangan),
    ("Haneman", TranslationKey::ScoreHaneman),
    ("Baiman", TranslationKey::ScoreBaiman),
    ("Sanbaiman", TranslationKey::ScoreSanbaiman),
    ("Yakuman", TranslationKey::ScoreYakuman),
    ("Double Yakuman", TranslationKey::ScoreDoubleYakuman),
    ("Counted Yakuman", TranslationKey::ScoreCountedYakuman),
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_yaku_term_maps_to_its_key() {
        assert_eq!(YAKU_TERMS.key_for("Riichi"), Some(TranslationKey::YakuRiichi));
        assert_eq!(
            YAKU_TERMS.key_for("Tanyao (All Simples)"),
            Some(TranslationKey::YakuTanyao)
        );
    }

    #[test]
    fn known_score_tier_maps_to_its_key() {
        assert_eq!(
            SCORE_TIER_TERMS.key_for("Double Yakuman"),
            Some(TranslationKey::ScoreDoubleYakuman)
        );
    }

    #[test]
    fn unknown_terms_miss() {
        assert_eq!(YAKU_TERMS.key_for("Unknown Rule"), None);
        assert_eq!(SCORE_TIER_TERMS.key_for("Mega Yakuman"), None);
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(YAKU_TERMS.key_for("riichi"), None);
        assert_eq!(SCORE_TIER_TERMS.key_for("mangan"), None);
    }

    #[test]
    fn backend_terms_are_unique_within_each_map() {
        for map in [&YAKU_TERMS, &SCORE_TIER_TERMS] {
            let mut terms: Vec<&str> = map.entries().iter().map(|&(term, _)| term).collect();
            terms.sort_unstable();
            terms.dedup();
            assert_eq!(terms.len(), map.entries().len());
        }
    }
}
