//! Fixed enumerations accepted by the jGrants list endpoint.
//!
//! Every value here travels verbatim on the wire, so the strings must not be
//! translated, trimmed or re-ordered. Display labels (what the search form
//! shows) are kept next to the wire values where the two differ.

use std::fmt;

/// Industry sent with every search. Not user-editable.
pub const FIXED_INDUSTRY: &str = "製造業";

/// Delimiter used to flatten the usage-purpose multi-select into one field.
pub const USE_PURPOSE_DELIMITER: &str = " / ";

/// Sort key (`sort` parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    /// `created_date`: 作成日時
    #[default]
    CreatedDate,
    /// `acceptance_start_datetime`: 募集開始日時
    AcceptanceStart,
    /// `acceptance_end_datetime`: 募集終了日時
    AcceptanceEnd,
}

impl SortField {
    pub const ALL: [SortField; 3] = [
        SortField::CreatedDate,
        SortField::AcceptanceStart,
        SortField::AcceptanceEnd,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortField::CreatedDate => "created_date",
            SortField::AcceptanceStart => "acceptance_start_datetime",
            SortField::AcceptanceEnd => "acceptance_end_datetime",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortField::CreatedDate => "作成日時",
            SortField::AcceptanceStart => "募集開始日時",
            SortField::AcceptanceEnd => "募集終了日時",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == value)
    }
}

/// Sort direction (`order` parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 2] = [SortOrder::Desc, SortOrder::Asc];

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Asc => "昇順",
            SortOrder::Desc => "降順",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.as_str() == value)
    }
}

/// Employee-count bucket (`target_number_of_employees` parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeBucket {
    Unrestricted,
    UpTo5,
    UpTo20,
    UpTo50,
    UpTo100,
    UpTo300,
    UpTo900,
    Over900,
}

impl EmployeeBucket {
    pub const ALL: [EmployeeBucket; 8] = [
        EmployeeBucket::Unrestricted,
        EmployeeBucket::UpTo5,
        EmployeeBucket::UpTo20,
        EmployeeBucket::UpTo50,
        EmployeeBucket::UpTo100,
        EmployeeBucket::UpTo300,
        EmployeeBucket::UpTo900,
        EmployeeBucket::Over900,
    ];

    /// Value sent upstream.
    pub fn as_str(self) -> &'static str {
        match self {
            EmployeeBucket::Unrestricted => "従業員の制約なし",
            EmployeeBucket::UpTo5 => "5名以下",
            EmployeeBucket::UpTo20 => "20名以下",
            EmployeeBucket::UpTo50 => "50名以下",
            EmployeeBucket::UpTo100 => "100名以下",
            EmployeeBucket::UpTo300 => "300名以下",
            EmployeeBucket::UpTo900 => "900名以下",
            EmployeeBucket::Over900 => "901名以上",
        }
    }

    /// Label shown in the select box.
    pub fn label(self) -> &'static str {
        match self {
            EmployeeBucket::Unrestricted => "制約なし",
            other => other.as_str(),
        }
    }

    /// Accepts either the wire value or the short label.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|b| b.as_str() == value || b.label() == value)
    }
}

const REGIONS: [&str; 9] = [
    "全国",
    "北海道地方",
    "東北地方",
    "関東・甲信越地方",
    "東海・北陸地方",
    "近畿地方",
    "中国地方",
    "四国地方",
    "九州・沖縄地方",
];

const PREFECTURES: [&str; 47] = [
    "北海道",
    "青森県",
    "岩手県",
    "宮城県",
    "秋田県",
    "山形県",
    "福島県",
    "茨城県",
    "栃木県",
    "群馬県",
    "埼玉県",
    "千葉県",
    "東京都",
    "神奈川県",
    "新潟県",
    "富山県",
    "石川県",
    "福井県",
    "山梨県",
    "長野県",
    "岐阜県",
    "静岡県",
    "愛知県",
    "三重県",
    "滋賀県",
    "京都府",
    "大阪府",
    "兵庫県",
    "奈良県",
    "和歌山県",
    "鳥取県",
    "島根県",
    "岡山県",
    "広島県",
    "山口県",
    "徳島県",
    "香川県",
    "愛媛県",
    "高知県",
    "福岡県",
    "佐賀県",
    "長崎県",
    "熊本県",
    "大分県",
    "宮崎県",
    "鹿児島県",
    "沖縄県",
];

/// Target area (`target_area_search` parameter): 全国, a region or a prefecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetArea(&'static str);

impl TargetArea {
    /// All selectable areas in form order (nationwide, regions, prefectures).
    pub fn all() -> impl Iterator<Item = TargetArea> {
        REGIONS
            .iter()
            .chain(PREFECTURES.iter())
            .map(|s| TargetArea(s))
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::all().find(|a| a.0 == value)
    }

    pub fn as_str(self) -> &'static str {
        self.0
    }

    pub fn is_prefecture(self) -> bool {
        PREFECTURES.contains(&self.0)
    }
}

impl fmt::Display for TargetArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

const USE_PURPOSES: [&str; 15] = [
    "新たな事業を行いたい",
    "販路拡大・海外展開をしたい",
    "イベント・事業運営支援がほしい",
    "事業を引き継ぎたい",
    "研究開発・実証事業を行いたい",
    "人材育成を行いたい",
    "資金繰りを改善したい",
    "設備整備・IT導入したい",
    "雇用・職場環境を改善したい",
    "エコ・SDG's活動支援がほしい",
    "災害（自然災害、感染症等）支援がほしい",
    "教育・子育て・少子化への支援がほしい",
    "スポーツ・文化への支援がほしい",
    "安全・防災対策支援がほしい",
    "まちづくり・地域振興支援がほしい",
];

/// One usage-purpose tag from the fixed list of fifteen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsePurpose(&'static str);

impl UsePurpose {
    pub fn all() -> impl Iterator<Item = UsePurpose> {
        USE_PURPOSES.iter().map(|s| UsePurpose(s))
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::all().find(|p| p.0 == value)
    }

    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for UsePurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Flattens selected purposes into the single `use_purpose` field.
pub fn join_use_purposes(purposes: &[UsePurpose]) -> String {
    purposes
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(USE_PURPOSE_DELIMITER)
}
