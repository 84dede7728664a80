//! Dynamic soil analysis reports rendered from live sensor values.
//!
//! The tier boundaries here are part of the bot's contract with its users;
//! the report text is Indonesian because that is what farmers read.

use std::fmt::Write as _;

use crate::domain::NpkReading;

/// Render a sensor value without float noise ("45", "6.8", "155")
pub fn display_number(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{}", rounded)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NutrientStatus {
    Low,
    Normal,
    High,
    Good,
    VeryGood,
}

impl NutrientStatus {
    pub fn label(&self) -> &'static str {
        match self {
            NutrientStatus::Low => "RENDAH",
            NutrientStatus::Normal => "NORMAL",
            NutrientStatus::High => "TINGGI",
            NutrientStatus::Good => "BAIK",
            NutrientStatus::VeryGood => "SANGAT BAIK",
        }
    }
}

pub fn nitrogen_status(nitrogen: f64) -> NutrientStatus {
    if nitrogen < 30.0 {
        NutrientStatus::Low
    } else if nitrogen > 60.0 {
        NutrientStatus::High
    } else {
        NutrientStatus::Normal
    }
}

pub fn phosphorus_status(phosphorus: f64) -> NutrientStatus {
    if phosphorus < 20.0 {
        NutrientStatus::Low
    } else if phosphorus > 50.0 {
        NutrientStatus::High
    } else {
        NutrientStatus::Normal
    }
}

pub fn potassium_status(potassium: f64) -> NutrientStatus {
    if potassium < 40.0 {
        NutrientStatus::Low
    } else if potassium > 80.0 {
        NutrientStatus::VeryGood
    } else {
        NutrientStatus::Good
    }
}

/// Overall verdict on the summed NPK score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NpkVerdict {
    ActionRequired,
    Good,
    Excellent,
}

impl NpkVerdict {
    pub fn from_total(total: f64) -> Self {
        if total < 120.0 {
            NpkVerdict::ActionRequired
        } else if total > 180.0 {
            NpkVerdict::Excellent
        } else {
            NpkVerdict::Good
        }
    }

    pub fn line(&self) -> &'static str {
        match self {
            NpkVerdict::ActionRequired => "🔥 **Action Required**: Pemupukan menyeluruh diperlukan",
            NpkVerdict::Good => "👍 **Good**: Kondisi tanah mendukung pertumbuhan",
            NpkVerdict::Excellent => "🌟 **Excellent**: Tanah dalam kondisi prima!",
        }
    }
}

/// Classified NPK snapshot; missing nutrients are scored as 0
#[derive(Debug, Clone, PartialEq)]
pub struct NpkAssessment {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub nitrogen_status: NutrientStatus,
    pub phosphorus_status: NutrientStatus,
    pub potassium_status: NutrientStatus,
    pub total: f64,
    pub verdict: NpkVerdict,
}

pub fn assess_npk(npk: &NpkReading) -> NpkAssessment {
    let nitrogen = npk.nitrogen.unwrap_or(0.0);
    let phosphorus = npk.phosphorus.unwrap_or(0.0);
    let potassium = npk.potassium.unwrap_or(0.0);
    let total = nitrogen + phosphorus + potassium;

    NpkAssessment {
        nitrogen,
        phosphorus,
        potassium,
        nitrogen_status: nitrogen_status(nitrogen),
        phosphorus_status: phosphorus_status(phosphorus),
        potassium_status: potassium_status(potassium),
        total,
        verdict: NpkVerdict::from_total(total),
    }
}

pub fn npk_analysis(npk: &NpkReading) -> String {
    let a = assess_npk(npk);
    let mut out = String::from("📊 **Analisis NPK Real-time:**\n\n");

    let _ = writeln!(out, "🔸 **Nitrogen (N): {}%**", display_number(a.nitrogen));
    match a.nitrogen_status {
        NutrientStatus::Low => {
            out.push_str("   ⚠️ **RENDAH** - Tanaman butuh nutrisi nitrogen segera\n");
            out.push_str("   💡 Rekomendasi: Pupuk Urea atau pupuk hijau\n");
        }
        NutrientStatus::High => {
            out.push_str("   ✅ **TINGGI** - Pertumbuhan daun optimal\n");
            out.push_str("   💡 Pertahankan kondisi ini\n");
        }
        _ => out.push_str("   ✅ **NORMAL** - Dalam rentang sehat\n"),
    }

    let _ = writeln!(out, "\n🔸 **Phosphorus (P): {}%**", display_number(a.phosphorus));
    match a.phosphorus_status {
        NutrientStatus::Low => {
            out.push_str("   ⚠️ **RENDAH** - Akar dan bunga perlu perhatian\n");
            out.push_str("   💡 Rekomendasi: TSP atau pupuk tulang\n");
        }
        NutrientStatus::High => out.push_str("   ✅ **TINGGI** - Perkembangan akar excellent\n"),
        _ => out.push_str("   ✅ **NORMAL** - Mendukung pembungaan baik\n"),
    }

    let _ = writeln!(out, "\n🔸 **Potassium (K): {}%**", display_number(a.potassium));
    match a.potassium_status {
        NutrientStatus::Low => {
            out.push_str("   ⚠️ **RENDAH** - Buah kurang berkualitas\n");
            out.push_str("   💡 Rekomendasi: KCl atau abu kayu\n");
        }
        NutrientStatus::VeryGood => {
            out.push_str("   ✅ **SANGAT BAIK** - Buah berkualitas premium\n")
        }
        _ => out.push_str("   ✅ **BAIK** - Kondisi optimal untuk buah\n"),
    }

    let _ = writeln!(out, "\n📈 **Skor Total: {}%**", display_number(a.total));
    out.push_str(a.verdict.line());
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoistureTier {
    CriticalDry,
    NeedsAttention,
    Optimal,
    High,
    VeryHigh,
}

impl MoistureTier {
    pub fn from_value(moisture: f64) -> Self {
        if moisture < 30.0 {
            MoistureTier::CriticalDry
        } else if moisture < 50.0 {
            MoistureTier::NeedsAttention
        } else if moisture < 70.0 {
            MoistureTier::Optimal
        } else if moisture < 85.0 {
            MoistureTier::High
        } else {
            MoistureTier::VeryHigh
        }
    }

    pub fn status_line(&self) -> &'static str {
        match self {
            MoistureTier::CriticalDry => "🚨 **STATUS: KRITIS - KERING**",
            MoistureTier::NeedsAttention => "⚠️ **STATUS: SEDANG - PERLU PERHATIAN**",
            MoistureTier::Optimal => "✅ **STATUS: OPTIMAL**",
            MoistureTier::High => "🔵 **STATUS: TINGGI - SANGAT BAIK**",
            MoistureTier::VeryHigh => "🌊 **STATUS: SANGAT TINGGI**",
        }
    }

    fn body(&self) -> &'static str {
        match self {
            MoistureTier::CriticalDry => concat!(
                "• Penyiraman SEGERA diperlukan\n",
                "• Tanaman dalam stress air\n",
                "• Risiko layu dan kerusakan akar\n\n",
                "💡 **Action Plan:**\n",
                "• Siram 2-3 kali hari ini\n",
                "• Berikan mulching\n",
                "• Monitor setiap 2 jam",
            ),
            MoistureTier::NeedsAttention => concat!(
                "• Kondisi borderline\n",
                "• Beberapa tanaman mungkin stress\n",
                "• Produktivitas mulai menurun\n\n",
                "💡 **Rekomendasi:**\n",
                "• Siram dalam 6-12 jam\n",
                "• Cek kembali besok pagi\n",
                "• Evaluasi sistem irigasi",
            ),
            MoistureTier::Optimal => concat!(
                "• Kelembaban ideal untuk pertumbuhan\n",
                "• Tanaman berkembang baik\n",
                "• Akar aktif menyerap nutrisi\n\n",
                "💡 **Maintenance:**\n",
                "• Pertahankan kondisi ini\n",
                "• Monitor harian\n",
                "• Siram sesuai jadwal normal",
            ),
            MoistureTier::High => concat!(
                "• Kondisi premium untuk tanaman\n",
                "• Pertumbuhan maksimal\n",
                "• Efisiensi nutrisi tinggi\n\n",
                "💡 **Tips:**\n",
                "• Kondisi ideal, lanjutkan\n",
                "• Pastikan drainase baik\n",
                "• Manfaatkan untuk propagasi",
            ),
            MoistureTier::VeryHigh => concat!(
                "• Risiko genangan air\n",
                "• Potensi busuk akar\n",
                "• Oksigen terbatas di akar\n\n",
                "⚠️ **Perhatian:**\n",
                "• Cek sistem drainase\n",
                "• Kurangi penyiraman\n",
                "• Aerasi tanah jika perlu",
            ),
        }
    }
}

pub fn moisture_analysis(moisture: f64) -> String {
    let tier = MoistureTier::from_value(moisture);
    format!(
        "💧 **Analisis Kelembaban Tanah:**\n\n🔸 **Kelembaban saat ini: {}%**\n\n{}\n{}",
        display_number(moisture),
        tier.status_line(),
        tier.body()
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhTier {
    VeryAcidic,
    Acidic,
    Optimal,
    SlightlyAlkaline,
    VeryAlkaline,
}

impl PhTier {
    /// 7.0 itself is still optimal; 8.0 is already very alkaline
    pub fn from_value(ph: f64) -> Self {
        if ph < 5.5 {
            PhTier::VeryAcidic
        } else if ph < 6.0 {
            PhTier::Acidic
        } else if ph <= 7.0 {
            PhTier::Optimal
        } else if ph < 8.0 {
            PhTier::SlightlyAlkaline
        } else {
            PhTier::VeryAlkaline
        }
    }

    pub fn status_line(&self) -> &'static str {
        match self {
            PhTier::VeryAcidic => "🔴 **STATUS: SANGAT ASAM**",
            PhTier::Acidic => "🟡 **STATUS: ASAM**",
            PhTier::Optimal => "✅ **STATUS: OPTIMAL**",
            PhTier::SlightlyAlkaline => "🟠 **STATUS: SEDIKIT BASA**",
            PhTier::VeryAlkaline => "🔵 **STATUS: SANGAT BASA**",
        }
    }

    fn body(&self) -> &'static str {
        match self {
            PhTier::VeryAcidic => concat!(
                "• Nutrisi sulit diserap tanaman\n",
                "• Aktivitas mikroba terhambat\n",
                "• Risiko keracunan aluminium\n\n",
                "💡 **Solusi:**\n",
                "• Tambahkan kapur pertanian\n",
                "• Aplikasi abu kayu\n",
                "• Kompos untuk buffer pH",
            ),
            PhTier::Acidic => concat!(
                "• Sebagian nutrisi terikat\n",
                "• Cocok untuk tanaman asidofil\n",
                "• Perlu sedikit koreksi\n\n",
                "💡 **Penyesuaian:**\n",
                "• Kapur dolomit secukupnya\n",
                "• Pupuk organik rutin\n",
                "• Monitor bulanan",
            ),
            PhTier::Optimal => concat!(
                "• pH ideal untuk mayoritas tanaman\n",
                "• Nutrisi mudah diserap\n",
                "• Aktivitas mikroba aktif\n\n",
                "💡 **Maintenance:**\n",
                "• Pertahankan dengan kompos\n",
                "• Monitor berkala\n",
                "• Hindari over-liming",
            ),
            PhTier::SlightlyAlkaline => concat!(
                "• Beberapa nutrisi mulai terikat\n",
                "• Zat besi sulit diserap\n",
                "• Perlu koreksi minor\n\n",
                "💡 **Koreksi:**\n",
                "• Tambahkan belerang\n",
                "• Pupuk organik asam\n",
                "• Mulching dengan daun pine",
            ),
            PhTier::VeryAlkaline => concat!(
                "• Nutrisi banyak yang terikat\n",
                "• Defisiensi mikronutrient\n",
                "• Perlu koreksi serius\n\n",
                "💡 **Treatment:**\n",
                "• Sulfur elemental\n",
                "• Pupuk asam tinggi\n",
                "• Sistem drainase baik",
            ),
        }
    }
}

pub fn ph_analysis(ph: f64) -> String {
    let tier = PhTier::from_value(ph);
    format!(
        "⚗️ **Analisis pH Tanah:**\n\n🔸 **pH saat ini: {}**\n\n{}\n{}",
        display_number(ph),
        tier.status_line(),
        tier.body()
    )
}
