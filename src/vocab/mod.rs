//! Static brand / category / alias vocabularies.
//!
//! The scoring and relevance rules are tuned against a fixed, closed set of
//! categories and brand names. Everything tunable lives here as data so the
//! tables can be revised without touching the matching algorithms.

#[cfg(test)]
mod tests;

/// Priority tier of a brand, used for the scoring brand bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandTier {
    /// The dominant brand in the source data.
    One,
    /// Secondary high-frequency brands.
    Two,
    /// Everything else on the priority list.
    Other,
}

/// A single category entry: canonical name plus its lookup keywords.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    /// Canonical category name.
    pub name: &'static str,
    /// Keywords whose presence (case-insensitive) assigns the category.
    pub keywords: &'static [&'static str],
}

/// One brand alias group: the canonical name and its accepted variants.
#[derive(Debug, Clone, Copy)]
pub struct AliasGroup {
    /// Canonical brand name.
    pub canonical: &'static str,
    /// Spelling / transliteration / legal-name variants.
    pub variants: &'static [&'static str],
}

/// Versioned bundle of all static matching tables.
///
/// `Vocabulary::default()` carries the built-in tables; swap in a custom
/// instance to retune matching without code changes.
#[derive(Debug, Clone, Copy)]
pub struct Vocabulary {
    /// Table revision, recorded in logs.
    pub version: &'static str,
    /// Brands checked for the scoring bonus, in priority order.
    pub priority_brands: &'static [&'static str],
    /// Tier-one brands (highest scoring bonus).
    pub tier_one: &'static [&'static str],
    /// Tier-two brands.
    pub tier_two: &'static [&'static str],
    /// Alias groups for manufacturer equivalence.
    pub aliases: &'static [AliasGroup],
    /// Multi-token brand+category compounds, checked before plain brands.
    pub compound_prefixes: &'static [&'static str],
    /// Brand prefixes the normalizer strips, in listed order.
    pub strip_brands: &'static [&'static str],
    /// Model prefixes that look like brands but are not (kept verbatim).
    pub model_prefixes: &'static [&'static str],
    /// Lowercase version-suffix tokens ("pro", "plus", ...).
    pub version_suffixes: &'static [&'static str],
    /// CJK character that closes a version suffix ("...版").
    pub version_suffix_cjk: char,
    /// Series marker shared by the dominant product family.
    pub series_marker: &'static str,
    /// Category keyword table.
    pub categories: &'static [Category],
    /// Company-name suffixes used when extracting a brand from a producer.
    pub company_suffixes: &'static [&'static str],
    /// Words too generic to be a brand on their own.
    pub generic_words: &'static [&'static str],
}

const PRIORITY_BRANDS: &[&str] = &[
    "格力", "奥克斯", "美的", "TCL", "海尔", "志高", "海信", "长虹", "科龙", "容声", "春兰",
    "新科", "华凌", "小天鹅", "统帅", "卡萨帝", "美菱", "创维", "康佳", "夏普", "松下", "三菱",
    "大金", "日立", "东芝", "LG", "SAMSUNG", "三星", "SONY", "索尼", "PHILIPS", "飞利浦",
    "SIEMENS", "西门子", "BOSCH", "博世", "WHIRLPOOL", "惠而浦", "约克", "YORK", "开利",
    "CARRIER", "特灵", "TRANE", "麦克维尔", "顿汉布什", "克莱门特", "盾安", "申菱", "欧科",
    "天加", "小米", "米家", "华为", "荣耀",
];

const ALIASES: &[AliasGroup] = &[
    AliasGroup {
        canonical: "格力",
        variants: &["GREE", "珠海格力", "格力电器"],
    },
    AliasGroup {
        canonical: "美的",
        variants: &["MIDEA", "美的集团", "美的电器"],
    },
    AliasGroup {
        canonical: "海尔",
        variants: &["HAIER", "海尔集团", "青岛海尔"],
    },
    AliasGroup {
        canonical: "奥克斯",
        variants: &["AUX", "奥克斯集团"],
    },
    AliasGroup {
        canonical: "志高",
        variants: &["CHIGO", "志高空调"],
    },
    AliasGroup {
        canonical: "TCL",
        variants: &["TCL集团", "TCL电器"],
    },
    AliasGroup {
        canonical: "海信",
        variants: &["HISENSE", "海信集团"],
    },
    AliasGroup {
        canonical: "长虹",
        variants: &["CHANGHONG", "四川长虹"],
    },
    AliasGroup {
        canonical: "科龙",
        variants: &["KELON", "海信科龙"],
    },
    AliasGroup {
        canonical: "容声",
        variants: &["RONSHEN"],
    },
    AliasGroup {
        canonical: "华凌",
        variants: &["WAHIN"],
    },
    AliasGroup {
        canonical: "卡萨帝",
        variants: &["CASARTE"],
    },
    AliasGroup {
        canonical: "统帅",
        variants: &["LEADER"],
    },
    AliasGroup {
        canonical: "小天鹅",
        variants: &["LITTLESWAN"],
    },
    AliasGroup {
        canonical: "三星",
        variants: &["SAMSUNG"],
    },
    AliasGroup {
        canonical: "松下",
        variants: &["PANASONIC"],
    },
    AliasGroup {
        canonical: "三菱",
        variants: &["MITSUBISHI"],
    },
    AliasGroup {
        canonical: "大金",
        variants: &["DAIKIN"],
    },
    AliasGroup {
        canonical: "西门子",
        variants: &["SIEMENS"],
    },
    AliasGroup {
        canonical: "博世",
        variants: &["BOSCH"],
    },
    AliasGroup {
        canonical: "惠而浦",
        variants: &["WHIRLPOOL"],
    },
];

const CATEGORIES: &[Category] = &[
    Category {
        name: "空调",
        keywords: &["空调", "KFR", "KF", "GMV", "制冷", "变频"],
    },
    Category {
        name: "冰箱",
        keywords: &["冰箱", "BCD", "冷藏", "冷冻", "双门", "三门"],
    },
    Category {
        name: "洗衣机",
        keywords: &["洗衣机", "XQG", "滚筒", "波轮", "全自动"],
    },
    Category {
        name: "热水器",
        keywords: &["热水器", "JSQ", "JSG", "燃气", "电热"],
    },
    Category {
        name: "油烟机",
        keywords: &["油烟机", "CXW", "抽油烟机", "吸油烟机"],
    },
    Category {
        name: "燃气灶",
        keywords: &["燃气灶", "JZT", "JZ", "灶具"],
    },
    Category {
        name: "电视",
        keywords: &["电视", "液晶", "LED", "OLED", "智能电视"],
    },
    Category {
        name: "吸尘器",
        keywords: &["吸尘器", "除尘器", "清洁器"],
    },
    Category {
        name: "净化器",
        keywords: &["净化器", "空气净化", "除甲醛"],
    },
    Category {
        name: "微波炉",
        keywords: &["微波炉", "光波炉"],
    },
    Category {
        name: "电磁炉",
        keywords: &["电磁炉", "电陶炉"],
    },
    Category {
        name: "豆浆机",
        keywords: &["豆浆机", "破壁机"],
    },
    Category {
        name: "电饭煲",
        keywords: &["电饭煲", "电饭锅", "智能煲"],
    },
    Category {
        name: "椅子",
        keywords: &["椅", "座椅", "办公椅", "电脑椅", "转椅"],
    },
];

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            version: "builtin-1",
            priority_brands: PRIORITY_BRANDS,
            tier_one: &["格力"],
            tier_two: &["奥克斯", "美的", "TCL"],
            aliases: ALIASES,
            compound_prefixes: &["美的空调"],
            strip_brands: &["格力", "美的", "海尔", "奥克斯", "志高", "TCL", "小米", "米家"],
            model_prefixes: &["KFR", "KF", "RF", "GR", "BCD", "XQG"],
            version_suffixes: &["pro", "plus", "max", "mini", "lite"],
            version_suffix_cjk: '版',
            series_marker: "KFR",
            categories: CATEGORIES,
            company_suffixes: &[
                "有限公司", "电器", "空调", "制冷", "科技", "实业", "集团", "股份", "公司",
            ],
            generic_words: &["有限", "股份", "电器", "空调", "制冷", "科技"],
        }
    }
}

impl Vocabulary {
    /// Returns the priority tier for a brand on the list, if any.
    pub fn brand_tier(&self, brand: &str) -> Option<BrandTier> {
        if self.tier_one.contains(&brand) {
            Some(BrandTier::One)
        } else if self.tier_two.contains(&brand) {
            Some(BrandTier::Two)
        } else if self.priority_brands.contains(&brand) {
            Some(BrandTier::Other)
        } else {
            None
        }
    }

    /// Resolves a brand name to its canonical alias-group name, if listed.
    ///
    /// Matching is case-insensitive over the canonical name and all variants.
    pub fn canonical_brand(&self, brand: &str) -> Option<&'static str> {
        let lowered = brand.to_lowercase();
        self.aliases.iter().find_map(|group| {
            if group.canonical.to_lowercase() == lowered
                || group
                    .variants
                    .iter()
                    .any(|v| v.to_lowercase() == lowered)
            {
                Some(group.canonical)
            } else {
                None
            }
        })
    }

    /// Looks up the category of an identifier via keyword containment.
    pub fn category_of(&self, text: &str) -> Option<&'static str> {
        let lowered = text.to_lowercase();
        self.categories.iter().find_map(|category| {
            category
                .keywords
                .iter()
                .any(|kw| lowered.contains(&kw.to_lowercase()))
                .then_some(category.name)
        })
    }

    /// True if the identifier ends in a recognized version suffix.
    pub fn has_version_suffix(&self, model: &str) -> bool {
        if model.ends_with(self.version_suffix_cjk) {
            return true;
        }
        let lowered = model.to_lowercase();
        self.version_suffixes
            .iter()
            .any(|suffix| lowered.ends_with(suffix))
    }

    /// True if both texts contain the series marker (case-sensitive).
    pub fn shares_series_marker(&self, a: &str, b: &str) -> bool {
        a.contains(self.series_marker) && b.contains(self.series_marker)
    }
}
