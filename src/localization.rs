//! Localized text lookup for sheet records and the menu chrome.

use crate::language::Language;
use crate::models::{Category, Record};

/// Languages tried after the active one, in order
const FALLBACK_LANGUAGES: [Language; 2] = [Language::English, Language::Chinese];

/// Resolve a localized column such as `name` or `flavor_tags`.
///
/// Tries `{base}_{active}`, then `{base}_en`, then `{base}_zh`, returning the
/// first value that is not blank. Returns an empty string when none match.
pub fn resolve(record: &Record, base: &str, language: Option<Language>) -> String {
    language
        .into_iter()
        .chain(FALLBACK_LANGUAGES)
        .map(|lang| record.get(&format!("{}_{}", base, lang.code())).trim())
        .find(|value| !value.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// Short Chinese label for a roast level code. Unknown codes pass through.
pub fn roast_label(code: &str) -> &str {
    match code {
        "Light" => "淺",
        "Light-Medium" => "淺中",
        "Medium" => "中",
        "Medium-Dark" => "中深",
        "Dark" => "深",
        other => other,
    }
}

/// Tab captions for one language
#[derive(Debug)]
pub struct TabLabels {
    pub all: &'static str,
    pub estate: &'static str,
    pub competition: &'static str,
    pub geisha: &'static str,
    pub limited: &'static str,
}

/// Menu chrome strings for one language
#[derive(Debug)]
pub struct UiText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub search_placeholder: &'static str,
    pub tabs: TabLabels,
    pub featured_badge: &'static str,
    pub empty: &'static str,
    pub gate_title: &'static str,
    pub gate_note: &'static str,
    pub gate_change: &'static str,
}

impl UiText {
    pub fn tab_label(&self, category: Category) -> &'static str {
        match category {
            Category::All => self.tabs.all,
            Category::Estate => self.tabs.estate,
            Category::Competition => self.tabs.competition,
            Category::Geisha => self.tabs.geisha,
            Category::Limited => self.tabs.limited,
        }
    }
}

/// Dictionary for the active language. An unset language uses Chinese.
pub fn ui_text(language: Option<Language>) -> &'static UiText {
    match language {
        Some(Language::English) => &UI_EN,
        Some(Language::Cantonese) => &UI_YUE,
        Some(Language::Korean) => &UI_KO,
        Some(Language::Japanese) => &UI_JA,
        Some(Language::Chinese) | None => &UI_ZH,
    }
}

static UI_ZH: UiText = UiText {
    title: "手沖豆單",
    subtitle: "1. 莊園級咖啡 $150，競賽級咖啡 $200，瑰夏 Geisha $300，限量版價格請至櫃檯詢問。\n2. 手沖比率皆為 1 : 16，若有濃淡度需求請於點餐時告知。",
    search_placeholder: "搜尋：品名、產區、風味、焙度…",
    tabs: TabLabels {
        all: "全部",
        estate: "莊園級咖啡",
        competition: "競賽級咖啡",
        geisha: "瑰夏 Geisha",
        limited: "限量版",
    },
    featured_badge: "本日推薦",
    empty: "沒有符合的品項。",
    gate_title: "選擇語言 / Choose Language",
    gate_note: "此偏好會儲存在本機裝置，可隨時更改。",
    gate_change: "可在頁面右上角再次更改語言",
};

static UI_EN: UiText = UiText {
    title: "Pour-Over Menu",
    subtitle: "1. Estate $150, Competition $200, Geisha $300. For limited editions, please ask at the counter.\n2. The default pour-over ratio is 1:16. Please inform us if you have other preferences.",
    search_placeholder: "Search: name, origin, flavors, roast…",
    tabs: TabLabels {
        all: "All",
        estate: "Estate Coffee",
        competition: "Competition Coffee",
        geisha: "Geisha",
        limited: "Limited Edition",
    },
    featured_badge: "Featured",
    empty: "No items found.",
    gate_title: "Choose Language",
    gate_note: "This preference is saved on your device and can be changed anytime.",
    gate_change: "You can change the language again with :lang",
};

static UI_YUE: UiText = UiText {
    title: "手沖豆單",
    subtitle: "1. 莊園級咖啡 $150，競賽級咖啡 $200，瑰夏 Geisha $300，限量版價格請到櫃檯查詢。\n2. 手沖比例係 1:16，如果對濃度有要求，落單時請話我哋知。",
    search_placeholder: "搜尋：品名、產區、風味、焙度…",
    tabs: TabLabels {
        all: "全部",
        estate: "莊園級咖啡",
        competition: "競賽級咖啡",
        geisha: "瑰夏 Geisha",
        limited: "限量版",
    },
    featured_badge: "今日推介",
    empty: "冇搵到相符嘅品項。",
    gate_title: "選擇語言 / Choose Language",
    gate_note: "呢個偏好會儲存喺你嘅裝置，可以隨時更改。",
    gate_change: "可以用 :lang 再次更改語言",
};

static UI_KO: UiText = UiText {
    title: "푸어오버 메뉴",
    subtitle: "1. 에스테이트 커피 ₩150, 대회용 커피 ₩200, 게이샤 ₩300. 한정판 가격은 카운터에 문의해주세요.\n2. 푸어오버 비율은 1:16입니다. 농도 조절이 필요하시면 주문 시 말씀해주세요.",
    search_placeholder: "검색: 이름, 원산지, 풍미, 로스팅 정도…",
    tabs: TabLabels {
        all: "전체",
        estate: "에스테이트 커피",
        competition: "대회급 커피",
        geisha: "게이샤",
        limited: "한정판",
    },
    featured_badge: "추천",
    empty: "해당하는 항목이 없습니다.",
    gate_title: "언어 선택 / Choose Language",
    gate_note: "이 설정은 기기에 저장되며 언제든지 변경할 수 있습니다.",
    gate_change: ":lang 명령으로 언어를 다시 변경할 수 있습니다",
};

static UI_JA: UiText = UiText {
    title: "ハンドドリップメニュー",
    subtitle: "1. エステート ¥150, コンペティション ¥200, ゲイシャ ¥300. 限定版の価格はカウンターでお尋ねください。\n2. ハンドドリップの比率は1:16です。濃さのご要望はご注文時にお知らせください。",
    search_placeholder: "検索：品名、産地、風味、焙煎度…",
    tabs: TabLabels {
        all: "すべて",
        estate: "エステート",
        competition: "コンペ",
        geisha: "ゲイシャ",
        limited: "限定版",
    },
    featured_badge: "おすすめ",
    empty: "該当する品目がありません。",
    gate_title: "言語を選択 / Choose Language",
    gate_note: "この設定はデバイスに保存され、いつでも変更できます。",
    gate_change: ":lang コマンドで再度言語を変更できます",
};

#[cfg(test)]
#[path = "localization_tests.rs"]
mod tests;
