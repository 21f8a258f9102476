//! Month-name recognition across indexing languages.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // One pattern per month. Each covers abbreviations and full names in the
    // languages indexers actually submit: English, Italian, Spanish, Greek,
    // Turkish, Finnish, Polish, Northern Sámi, French, German, Hungarian,
    // Dutch, and Scandinavian season words used in place of a month.
    // The pattern set is load-bearing: downstream key dates depend on exactly
    // these spellings, so new languages get appended, not rewritten.
    static ref MONTH_PATTERNS: [Regex; 12] = [
        Regex::new(r"^(jan|gen|ene|ιαν|ocak|tammikuu|styczeń|o(dd|đđ)ajag)").unwrap(),
        Regex::new(r"^(feb|f[eé]v|φεβ|şubat|helmikuu|luty|guovva)").unwrap(),
        Regex::new(r"^(m[aä]r|márc|maart|μ[αά]ρ|maaliskuu|njukča)").unwrap(),
        Regex::new(r"^(a[pvb]r|ápr|απρ|nisan|huhtikuu|kwiecień|cuoŋo|spring|vår|påsk)").unwrap(),
        Regex::new(r"^(ma[yigj]|máj|mei|μάι|μαΐ|toukokuu|miesse)").unwrap(),
        Regex::new(r"^(j[uú]n|giu|juin|ιο[υύ]ν|haziran|kesäkuu|czerwiec|geasse)").unwrap(),
        Regex::new(r"^(j[uú]l|lug|juil|ιο[υύ]λ|heinäkuu|temmuz|lipiec|suoidne|summer|sommar)").unwrap(),
        Regex::new(r"^(aug|ago|aoû|α[υύ]γ|ağustos|elokuu|sierpień|borge)").unwrap(),
        Regex::new(r"^(se[pt]|szept|σεπ|eylül)|syyskuu|wrzesień|čakča").unwrap(),
        Regex::new(r"^(o[ckt]t|out|οκτ|ekim|lokakuu|październik|golggot|fall|h[öø]st)").unwrap(),
        Regex::new(r"^(nov|νο[εέ]|kasım|marraskuu|listopad|skábma)").unwrap(),
        Regex::new(r"^(de[czs]|d[éi]c|δεκ|aralık|joulukuu|grudzień|juovla)").unwrap(),
    ];
}

/// Match a lowercased token against the month table.
///
/// Returns the month number 1-12, or 0 if no pattern matches. The literal
/// tokens `julen` and `jula` (Christmas in sv/da/no) resolve to December
/// before the table is consulted.
///
/// # Examples
/// ```
/// use comicdex_dates::check_month;
/// assert_eq!(check_month("march"), 3);
/// assert_eq!(check_month("joulukuu"), 12);
/// assert_eq!(check_month("julen"), 12);
/// assert_eq!(check_month("tuesday"), 0);
/// ```
pub fn check_month(token: &str) -> u8 {
    if token == "julen" || token == "jula" {
        return 12;
    }
    for (i, pattern) in MONTH_PATTERNS.iter().enumerate() {
        if pattern.is_match(token) {
            return (i + 1) as u8;
        }
    }
    0
}
