// SPDX-License-Identifier: MPL-2.0
//! Embedded translation catalog.
//!
//! Each supported locale ships one Fluent resource under `assets/i18n/`.
//! [`Catalog::load`] resolves every message eagerly into a plain
//! [`TranslationTable`], so lookups are total: a message missing from any
//! locale is a data defect that fails the load, never a runtime condition.

use crate::error::{Error, Result};
use crate::locale::Locale;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// One symbolic identifier per translatable string concept.
///
/// Declaration order fixes the table layout; [`TranslationKey::ALL`]
/// mirrors it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranslationKey {
    // UI labels
    AppTitle,
    HandInputLabel,
    ValidateButton,
    ClearButton,
    ResultValid,
    ResultInvalid,
    HanLabel,
    FuLabel,
    PointsLabel,
    Dealer,
    NonDealer,
    RoundWindLabel,
    SeatWindLabel,
    DoraLabel,
    LanguageLabel,
    // Winds
    WindEast,
    WindSouth,
    WindWest,
    WindNorth,
    // Yaku
    YakuRiichi,
    YakuIppatsu,
    YakuMenzenTsumo,
    YakuTanyao,
    YakuPinfu,
    YakuIipeikou,
    YakuYakuhaiEast,
    YakuYakuhaiSouth,
    YakuYakuhaiWest,
    YakuYakuhaiNorth,
    YakuYakuhaiWhite,
    YakuYakuhaiGreen,
    YakuYakuhaiRed,
    YakuRinshanKaihou,
    YakuChankan,
    YakuHaitei,
    YakuHoutei,
    YakuDoubleRiichi,
    YakuToitoi,
    YakuSanshokuDoujun,
    YakuSanshokuDoukou,
    YakuIttsu,
    YakuChiitoitsu,
    YakuChanta,
    YakuSanAnkou,
    YakuSanKantsu,
    YakuHonroutou,
    YakuShousangen,
    YakuHonitsu,
    YakuJunchan,
    YakuRyanpeikou,
    YakuChinitsu,
    YakuTenhou,
    YakuChiihou,
    YakuKokushiMusou,
    YakuSuuankou,
    YakuDaisangen,
    YakuShousuushii,
    YakuDaisuushii,
    YakuTsuuiisou,
    YakuChinroutou,
    YakuRyuuiisou,
    YakuChuurenPoutou,
    YakuKokushiJuusanmen,
    YakuSuuankouTanki,
    YakuJunseiChuurenPoutou,
    YakuSuuKantsu,
    // Score tiers
    ScoreMangan,
    ScoreHaneman,
    ScoreBaiman,
    ScoreSanbaiman,
    ScoreYakuman,
    ScoreDoubleYakuman,
    ScoreCountedYakuman,
}

impl TranslationKey {
    /// Every key, in declaration order.
    pub const ALL: [TranslationKey; 73] = [
        TranslationKey::AppTitle,
        TranslationKey::HandInputLabel,
        TranslationKey::ValidateButton,
        TranslationKey::ClearButton,
        TranslationKey::ResultValid,
        TranslationKey::ResultInvalid,
        TranslationKey::HanLabel,
        TranslationKey::FuLabel,
        TranslationKey::PointsLabel,
        TranslationKey::Dealer,
        TranslationKey::NonDealer,
        TranslationKey::RoundWindLabel,
        TranslationKey::SeatWindLabel,
        TranslationKey::DoraLabel,
        TranslationKey::LanguageLabel,
        TranslationKey::WindEast,
        TranslationKey::WindSouth,
        TranslationKey::WindWest,
        TranslationKey::WindNorth,
        TranslationKey::YakuRiichi,
        TranslationKey::YakuIppatsu,
        TranslationKey::YakuMenzenTsumo,
        TranslationKey::YakuTanyao,
        TranslationKey::YakuPinfu,
        TranslationKey::YakuIipeikou,
        TranslationKey::YakuYakuhaiEast,
        TranslationKey::YakuYakuhaiSouth,
        TranslationKey::YakuYakuhaiWest,
        TranslationKey::YakuYakuhaiNorth,
        TranslationKey::YakuYakuhaiWhite,
        TranslationKey::YakuYakuhaiGreen,
        TranslationKey::YakuYakuhaiRed,
        TranslationKey::YakuRinshanKaihou,
        TranslationKey::YakuChankan,
        TranslationKey::YakuHaitei,
        TranslationKey::YakuHoutei,
        TranslationKey::YakuDoubleRiichi,
        TranslationKey::YakuToitoi,
        TranslationKey::YakuSanshokuDoujun,
        TranslationKey::YakuSanshokuDoukou,
        TranslationKey::YakuIttsu,
        TranslationKey::YakuChiitoitsu,
        TranslationKey::YakuChanta,
        TranslationKey::YakuSanAnkou,
        TranslationKey::YakuSanKantsu,
        TranslationKey::YakuHonroutou,
        TranslationKey::YakuShousangen,
        TranslationKey::YakuHonitsu,
        TranslationKey::YakuJunchan,
        TranslationKey::YakuRyanpeikou,
        TranslationKey::YakuChinitsu,
        TranslationKey::YakuTenhou,
        TranslationKey::YakuChiihou,
        TranslationKey::YakuKokushiMusou,
        TranslationKey::YakuSuuankou,
        TranslationKey::YakuDaisangen,
        TranslationKey::YakuShousuushii,
        TranslationKey::YakuDaisuushii,
        TranslationKey::YakuTsuuiisou,
        TranslationKey::YakuChinroutou,
        TranslationKey::YakuRyuuiisou,
        TranslationKey::YakuChuurenPoutou,
        TranslationKey::YakuKokushiJuusanmen,
        TranslationKey::YakuSuuankouTanki,
        TranslationKey::YakuJunseiChuurenPoutou,
        TranslationKey::YakuSuuKantsu,
        TranslationKey::ScoreMangan,
        TranslationKey::ScoreHaneman,
        TranslationKey::ScoreBaiman,
        TranslationKey::ScoreSanbaiman,
        TranslationKey::ScoreYakuman,
        TranslationKey::ScoreDoubleYakuman,
        TranslationKey::ScoreCountedYakuman,
    ];

    /// The Fluent message id carrying this key's text.
    pub fn message_id(self) -> &'static str {
        match self {
            TranslationKey::AppTitle => "app-title",
            TranslationKey::HandInputLabel => "hand-input-label",
            TranslationKey::ValidateButton => "validate-button",
            TranslationKey::ClearButton => "clear-button",
            TranslationKey::ResultValid => "result-valid",
            TranslationKey::ResultInvalid => "result-invalid",
            TranslationKey::HanLabel => "han-label",
            TranslationKey::FuLabel => "fu-label",
            TranslationKey::PointsLabel => "points-label",
            TranslationKey::Dealer => "dealer",
            TranslationKey::NonDealer => "non-dealer",
            TranslationKey::RoundWindLabel => "round-wind-label",
            TranslationKey::SeatWindLabel => "seat-wind-label",
            TranslationKey::DoraLabel => "dora-label",
            TranslationKey::LanguageLabel => "language-label",
            TranslationKey::WindEast => "wind-east",
            TranslationKey::WindSouth => "wind-south",
            TranslationKey::WindWest => "wind-west",
            TranslationKey::WindNorth => "wind-north",
            TranslationKey::YakuRiichi => "yaku-riichi",
            TranslationKey::YakuIppatsu => "yaku-ippatsu",
            TranslationKey::YakuMenzenTsumo => "yaku-menzen-tsumo",
            TranslationKey::YakuTanyao => "yaku-tanyao",
            TranslationKey::YakuPinfu => "yaku-pinfu",
            TranslationKey::YakuIipeikou => "yaku-iipeikou",
            TranslationKey::YakuYakuhaiEast => "yaku-yakuhai-east",
            TranslationKey::YakuYakuhaiSouth => "yaku-yakuhai-south",
            TranslationKey::YakuYakuhaiWest => "yaku-yakuhai-west",
            TranslationKey::YakuYakuhaiNorth => "yaku-yakuhai-north",
            TranslationKey::YakuYakuhaiWhite => "yaku-yakuhai-white",
            TranslationKey::YakuYakuhaiGreen => "yaku-yakuhai-green",
            TranslationKey::YakuYakuhaiRed => "yaku-yakuhai-red",
            TranslationKey::YakuRinshanKaihou => "yaku-rinshan-kaihou",
            TranslationKey::YakuChankan => "yaku-chankan",
            TranslationKey::YakuHaitei => "yaku-haitei",
            TranslationKey::YakuHoutei => "yaku-houtei",
            TranslationKey::YakuDoubleRiichi => "yaku-double-riichi",
            TranslationKey::YakuToitoi => "yaku-toitoi",
            TranslationKey::YakuSanshokuDoujun => "yaku-sanshoku-doujun",
            TranslationKey::YakuSanshokuDoukou => "yaku-sanshoku-doukou",
            TranslationKey::YakuIttsu => "yaku-ittsu",
            TranslationKey::YakuChiitoitsu => "yaku-chiitoitsu",
            TranslationKey::YakuChanta => "yaku-chanta",
            TranslationKey::YakuSanAnkou => "yaku-san-ankou",
            TranslationKey::YakuSanKantsu => "yaku-san-kantsu",
            TranslationKey::YakuHonroutou => "yaku-honroutou",
            TranslationKey::YakuShousangen => "yaku-shousangen",
            TranslationKey::YakuHonitsu => "yaku-honitsu",
            TranslationKey::YakuJunchan => "yaku-junchan",
            TranslationKey::YakuRyanpeikou => "yaku-ryanpeikou",
            TranslationKey::YakuChinitsu => "yaku-chinitsu",
            TranslationKey::YakuTenhou => "yaku-tenhou",
            TranslationKey::YakuChiihou => "yaku-chiihou",
            TranslationKey::YakuKokushiMusou => "yaku-kokushi-musou",
            TranslationKey::YakuSuuankou => "yaku-suuankou",
            TranslationKey::YakuDaisangen => "yaku-daisangen",
            TranslationKey::YakuShousuushii => "yaku-shousuushii",
            TranslationKey::YakuDaisuushii => "yaku-daisuushii",
            TranslationKey::YakuTsuuiisou => "yaku-tsuuiisou",
            TranslationKey::YakuChinroutou => "yaku-chinroutou",
            TranslationKey::YakuRyuuiisou => "yaku-ryuuiisou",
            TranslationKey::YakuChuurenPoutou => "yaku-chuuren-poutou",
            TranslationKey::YakuKokushiJuusanmen => "yaku-kokushi-juusanmen",
            TranslationKey::YakuSuuankouTanki => "yaku-suuankou-tanki",
            TranslationKey::YakuJunseiChuurenPoutou => "yaku-junsei-chuuren-poutou",
            TranslationKey::YakuSuuKantsu => "yaku-suu-kantsu",
            TranslationKey::ScoreMangan => "score-mangan",
            TranslationKey::ScoreHaneman => "score-haneman",
            TranslationKey::ScoreBaiman => "score-baiman",
            TranslationKey::ScoreSanbaiman => "score-sanbaiman",
            TranslationKey::ScoreYakuman => "score-yakuman",
            TranslationKey::ScoreDoubleYakuman => "score-double-yakuman",
            TranslationKey::ScoreCountedYakuman => "score-counted-yakuman",
        }
    }
}

/// Fully resolved display strings for one locale, total over
/// [`TranslationKey`]: every key resolves, by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationTable {
    locale: Locale,
    /// Indexed by key discriminant; length equals `TranslationKey::ALL.len()`.
    strings: Vec<String>,
}

impl TranslationTable {
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// The display string for `key`. Total; cannot fail.
    pub fn get(&self, key: TranslationKey) -> &str {
        &self.strings[key as usize]
    }
}

/// Immutable mapping from every supported locale to its translation
/// table. Loaded once, never mutated.
#[derive(Debug)]
pub struct Catalog {
    /// Indexed by locale discriminant; one entry per `Locale::ALL` member.
    tables: Vec<TranslationTable>,
}

impl Catalog {
    /// Parses the embedded Fluent resources and resolves every message of
    /// every locale. Any missing or malformed message is reported as a
    /// [`Error::Catalog`].
    pub fn load() -> Result<Self> {
        let mut tables = Vec::with_capacity(Locale::ALL.len());
        for locale in Locale::ALL {
            tables.push(load_table(locale)?);
        }
        Ok(Self { tables })
    }

    /// The table for `locale`.
    pub fn table(&self, locale: Locale) -> &TranslationTable {
        &self.tables[locale as usize]
    }
}

fn load_table(locale: Locale) -> Result<TranslationTable> {
    let filename = format!("{}.ftl", locale.code());
    let asset = Asset::get(&filename)
        .ok_or_else(|| Error::Catalog(format!("missing translation resource `{}`", filename)))?;
    let source = String::from_utf8_lossy(asset.data.as_ref()).into_owned();
    let resource = FluentResource::try_new(source).map_err(|(_, errors)| {
        Error::Catalog(format!("failed to parse `{}`: {:?}", filename, errors))
    })?;

    let langid: LanguageIdentifier = locale
        .code()
        .parse()
        .map_err(|e| Error::Catalog(format!("invalid locale code `{}`: {}", locale.code(), e)))?;
    let mut bundle = FluentBundle::new(vec![langid]);
    // Plain strings with no placeables; keep bidi isolation marks out.
    bundle.set_use_isolating(false);
    bundle.add_resource(resource).map_err(|errors| {
        Error::Catalog(format!("conflicting messages in `{}`: {:?}", filename, errors))
    })?;

    let mut strings = Vec::with_capacity(TranslationKey::ALL.len());
    for key in TranslationKey::ALL {
        let pattern = bundle
            .get_message(key.message_id())
            .and_then(|message| message.value())
            .ok_or_else(|| {
                Error::Catalog(format!(
                    "locale `{}` is missing message `{}`",
                    locale.code(),
                    key.message_id()
                ))
            })?;
        let mut errors = Vec::new();
        let value = bundle.format_pattern(pattern, None, &mut errors);
        if !errors.is_empty() {
            return Err(Error::Catalog(format!(
                "locale `{}` message `{}` failed to format: {:?}",
                locale.code(),
                key.message_id(),
                errors
            )));
        }
        strings.push(value.into_owned());
    }

    Ok(TranslationTable { locale, strings })
}
