/// Templated "insight" card for the station panel.
///
/// The narrative is a fixed table keyed by tone and language. Tones are
/// derived from the shared `RiskTier`, so the card always agrees with the
/// headline colour.

use crate::alert::RiskTier;
use crate::i18n::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightTone {
    Fresh,
    Chill,
    Hazy,
    Toxic,
}

impl InsightTone {
    pub const ALL: [InsightTone; 4] = [
        InsightTone::Fresh,
        InsightTone::Chill,
        InsightTone::Hazy,
        InsightTone::Toxic,
    ];

    pub fn for_tier(tier: RiskTier) -> InsightTone {
        match tier {
            RiskTier::Good => InsightTone::Fresh,
            RiskTier::Moderate => InsightTone::Chill,
            RiskTier::SensitiveGroups => InsightTone::Hazy,
            RiskTier::Unhealthy | RiskTier::Hazardous => InsightTone::Toxic,
        }
    }

    /// Card background gradient.
    pub fn gradient(self) -> &'static str {
        match self {
            InsightTone::Fresh => "from-emerald-400 to-green-500",
            InsightTone::Chill => "from-blue-500 to-cyan-500",
            InsightTone::Hazy => "from-orange-400 to-amber-500",
            InsightTone::Toxic => "from-red-600 to-rose-600",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insight {
    pub tone: InsightTone,
    pub title: &'static str,
    pub description: &'static str,
    pub recommendation: &'static str,
    pub gradient: &'static str,
}

pub fn compose(tier: RiskTier, lang: Language) -> Insight {
    let tone = InsightTone::for_tier(tier);
    let (title, description, recommendation) = text(tone, lang);
    Insight {
        tone,
        title,
        description,
        recommendation,
        gradient: tone.gradient(),
    }
}

fn text(tone: InsightTone, lang: Language) -> (&'static str, &'static str, &'static str) {
    match (tone, lang) {
        (InsightTone::Toxic, Language::En) => (
            "Toxic Alert! ☠️",
            "Air is stagnant. Pollution is trapped. It's nasty out there.",
            "Mask up or stay inside. Seriously.",
        ),
        (InsightTone::Toxic, Language::Th) => (
            "สัญญาณอันตราย! สีแดงเดือด 🔥",
            "อากาศปิดสนิท ฝุ่นขังรวมกันหนาแน่น ข้างนอกคือท็อกซิกสุดๆ",
            "ใส่ N95 ด่วน! หรือถ้าไม่จำเป็นอย่าออกไปสูดดม",
        ),
        (InsightTone::Hazy, Language::En) => (
            "Getting Hazy 😷",
            "Dust is piling up. Sensitive folks might feel it.",
            "Take it easy outdoors.",
        ),
        (InsightTone::Hazy, Language::Th) => (
            "เริ่มตุๆ แล้วนะจมูก 😷",
            "ฝุ่นเริ่มมาสะสมตัว ใครแพ้ง่ายอาจจะมีฟุดฟิดบ้าง",
            "ลดกิจกรรมกลางแจ้งลงหน่อยก็ดีนะ",
        ),
        (InsightTone::Fresh, Language::En) => (
            "Super Fresh ✨",
            "Clean air! Looks like good wind dispersion.",
            "Perfect for a run!",
        ),
        (InsightTone::Fresh, Language::Th) => (
            "คลีนเว่อร์! หายใจให้สุดปอด ✨",
            "อากาศใสปิ๊ง! ลมพัดดี ฝุ่นกระเจิงหมดแล้ว",
            "เวลานี้แหละ! ไปวิ่งหรือเดินเล่นด่วนๆ",
        ),
        (InsightTone::Chill, Language::En) => (
            "Chill Vibes",
            "Air is pretty steady. Nothing to worry about.",
            "Go out and enjoy!",
        ),
        (InsightTone::Chill, Language::Th) => (
            "สถานการณ์ชิลๆ",
            "อากาศนิ่งๆ ไม่มีอะไรน่าห่วง ใช้ชีวิตได้ตามสบาย",
            "ออกไปหาไรทำข้างนอกได้เลย!",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::classify;

    #[test]
    fn test_tone_follows_tier() {
        assert_eq!(compose(classify(30), Language::En).tone, InsightTone::Fresh);
        assert_eq!(compose(classify(75), Language::En).tone, InsightTone::Chill);
        assert_eq!(compose(classify(120), Language::En).tone, InsightTone::Hazy);
        assert_eq!(compose(classify(151), Language::En).tone, InsightTone::Toxic);
        assert_eq!(compose(classify(300), Language::En).tone, InsightTone::Toxic);
    }

    #[test]
    fn test_boundary_values_pick_expected_tone() {
        assert_eq!(compose(classify(50), Language::Th).tone, InsightTone::Fresh);
        assert_eq!(compose(classify(100), Language::Th).tone, InsightTone::Chill);
        assert_eq!(compose(classify(150), Language::Th).tone, InsightTone::Hazy);
    }

    #[test]
    fn test_every_tone_has_text_in_every_language() {
        for tone in InsightTone::ALL {
            for lang in Language::ALL {
                let (title, desc, rec) = text(tone, lang);
                assert!(!title.is_empty() && !desc.is_empty() && !rec.is_empty());
            }
        }
    }

    #[test]
    fn test_gradient_matches_tone() {
        let insight = compose(RiskTier::Hazardous, Language::En);
        assert_eq!(insight.gradient, "from-red-600 to-rose-600");
        assert_eq!(insight.title, "Toxic Alert! ☠️");
    }
}
