//! Static SoilBot texts and follow-up suggestion lists.

use crate::domain::Season;

pub const NPK_INFO: &str = concat!(
    "🌱 **Informasi NPK (Nitrogen-Phosphorus-Potassium):**\n\n",
    "NPK adalah tiga nutrisi utama yang dibutuhkan tanaman:\n",
    "• **Nitrogen (N)**: Pertumbuhan daun dan batang\n",
    "• **Phosphorus (P)**: Perkembangan akar dan bunga\n",
    "• **Potassium (K)**: Ketahanan dan kualitas buah\n\n",
    "Untuk analisis real-time, pastikan sensor SoilSense aktif!",
);

pub const NPK_ANALYSIS_SUGGESTIONS: &[&str] = &[
    "Rekomendasi pupuk untuk NPK rendah",
    "Jadwal pemupukan optimal",
    "Cara meningkatkan efisiensi nutrisi",
];

pub const NPK_INFO_SUGGESTIONS: &[&str] = &[
    "Cara mengaktifkan sensor NPK",
    "Tips pemupukan manual",
    "Tanda kekurangan nutrisi",
];

pub const WATERING_INFO: &str = concat!(
    "💧 **Panduan Pengairan Tanaman:**\n\n",
    "Kelembaban optimal berbeda untuk setiap jenis tanaman:\n",
    "• **Sayuran**: 50-70%\n",
    "• **Buah-buahan**: 60-80%\n",
    "• **Tanaman hias**: 40-60%\n\n",
    "**Tips penyiraman:**\n",
    "• Pagi hari (06:00-08:00) atau sore (16:00-18:00)\n",
    "• Siram secara merata\n",
    "• Pastikan drainase baik",
);

pub const MOISTURE_ANALYSIS_SUGGESTIONS: &[&str] = &[
    "Jadwal penyiraman otomatis",
    "Teknik hemat air",
    "Sistem irigasi tetes",
];

pub const WATERING_INFO_SUGGESTIONS: &[&str] = &[
    "Cara mengecek kelembaban manual",
    "Tanda tanaman kekurangan air",
    "Sistem penyiraman sederhana",
];

pub const FERTILIZER_INFO: &str = concat!(
    "🌾 **Panduan Pemupukan:**\n\n",
    "**Jenis Pupuk:**\n",
    "• **Organik**: Kompos, pupuk kandang, vermikompos\n",
    "• **Anorganik**: NPK, Urea, TSP, KCl\n",
    "• **Cair**: Untuk penyerapan cepat\n\n",
    "**Jadwal Pemupukan:**\n",
    "• Pupuk dasar: Saat tanam\n",
    "• Pupuk susulan: 2-4 minggu sekali\n",
    "• Pupuk cair: 1-2 minggu sekali\n\n",
    "**Dosis umum**: 2-3 sendok makan per tanaman (sesuaikan ukuran)",
);

pub const FERTILIZER_SUGGESTIONS: &[&str] = &[
    "Cara membuat kompos sendiri",
    "Pupuk organik vs kimia",
    "Tanda overfertilisasi",
];

pub const PEST_INFO: &str = concat!(
    "🐛 **Pengendalian Hama dan Penyakit:**\n\n",
    "**Pencegahan Natural:**\n",
    "• Rotasi tanaman setiap musim\n",
    "• Tanaman pendamping (basil, marigold)\n",
    "• Jaga kebersihan lahan\n",
    "• Monitor rutin 2-3 hari sekali\n\n",
    "**Pestisida Organik:**\n",
    "• Neem oil untuk aphids\n",
    "• Sabun cuci untuk kutu\n",
    "• Bawang putih + cabai untuk ulat\n",
    "• Bacillus thuringiensis untuk larva",
);

pub const PEST_SUGGESTIONS: &[&str] = &[
    "Identifikasi hama umum",
    "Resep pestisida alami",
    "Kapan menggunakan pestisida kimia",
];

const DRY_SEASON_STRATEGY: &str = concat!(
    "**Strategi Musim Kering:**\n",
    "• Penyiraman lebih sering (2x sehari)\n",
    "• Mulching untuk menahan kelembaban\n",
    "• Pilih varietas tahan kekeringan\n",
    "• Naungan sementara saat terik\n",
    "• Harvest air hujan untuk cadangan",
);

const WET_SEASON_STRATEGY: &str = concat!(
    "**Strategi Musim Hujan:**\n",
    "• Pastikan drainase lancar\n",
    "• Kurangi frekuensi penyiraman\n",
    "• Waspada penyakit jamur\n",
    "• Aplikasi fungisida preventif\n",
    "• Panen sebelum hujan deras",
);

/// Weather-family reply for the given season
pub fn seasonal_strategy(season: Season) -> String {
    let strategy = match season {
        Season::Dry => DRY_SEASON_STRATEGY,
        Season::Wet => WET_SEASON_STRATEGY,
    };
    format!(
        "🌤️ **Tips Musiman (Musim {}):**\n\n{}",
        season.short_label(),
        strategy
    )
}

pub const WEATHER_SUGGESTIONS: &[&str] = &[
    "Persiapan pergantian musim",
    "Tanaman sesuai musim",
    "Manajemen air hujan",
];

pub const PH_INFO: &str = concat!(
    "⚗️ **Panduan pH Tanah:**\n\n",
    "**Skala pH:**\n",
    "• 0-6.9: Asam\n",
    "• 7.0: Netral\n",
    "• 7.1-14: Basa\n\n",
    "**pH Optimal:**\n",
    "• Sayuran: 6.0-7.0\n",
    "• Buah: 5.5-6.5\n",
    "• Padi: 5.5-6.5\n\n",
    "**Koreksi pH:**\n",
    "• Tanah asam: Tambah kapur\n",
    "• Tanah basa: Tambah sulfur/kompos",
);

/// Shared by the analysis and the static pH reply
pub const PH_SUGGESTIONS: &[&str] = &[
    "Cara mengukur pH tanah",
    "Bahan alami untuk koreksi pH",
    "Tanaman untuk tanah asam/basa",
];

pub const WELCOME: &str = concat!(
    "🤖 **Halo! Saya SoilBot, asisten pertanian pintar Anda.**\n\n",
    "Saya bisa membantu dengan:\n",
    "• Analisis kondisi tanah (NPK, pH, kelembaban)\n",
    "• Rekomendasi pemupukan dan penyiraman\n",
    "• Tips pengendalian hama dan penyakit\n",
    "• Panduan musiman dan cuaca\n",
    "• Troubleshooting masalah tanaman\n\n",
    "Silakan tanyakan hal spesifik atau pilih topik dari menu utama! 🌱",
);

pub const WELCOME_SUGGESTIONS: &[&str] = &[
    "Analisis nutrisi tanah saya",
    "Tips penyiraman yang tepat",
    "Cara mengatasi hama pada tanaman",
    "Rekomendasi pupuk organic",
];

pub const DEFICIENCY_GUIDE: &str = concat!(
    "🌿 **Panduan Identifikasi Kekurangan Nutrisi:**\n\n",
    "**🔸 Kekurangan Nitrogen:**\n",
    "• Daun menguning dari bawah ke atas\n",
    "• Pertumbuhan lambat dan kerdil\n",
    "• Batang lemah dan tipis\n\n",
    "**🔸 Kekurangan Fosfor:**\n",
    "• Daun berwarna ungu/kemerahan\n",
    "• Akar berkembang buruk\n",
    "• Pembungaan terlambat\n\n",
    "**🔸 Kekurangan Kalium:**\n",
    "• Tepi daun menguning/coklat\n",
    "• Buah kecil dan tidak manis\n",
    "• Tanaman mudah rebah\n\n",
    "**💡 Solusi Cepat:**\n",
    "• Pupuk daun untuk nutrisi instan\n",
    "• Kompos tea untuk organik\n",
    "• Test soil untuk diagnosis akurat",
);

pub const FERTILIZER_GUIDE: &str = concat!(
    "🌾 **Panduan Lengkap Pemupukan:**\n\n",
    "**Tahap 1: Pupuk Dasar (saat tanam)**\n",
    "• Kompos/pupuk kandang: 2-3 kg/m²\n",
    "• NPK 15-15-15: 50g/m²\n",
    "• Aduk rata dengan tanah\n\n",
    "**Tahap 2: Pupuk Susulan (2-4 minggu)**\n",
    "• NPK sesuai fase pertumbuhan\n",
    "• Urea untuk fase vegetatif\n",
    "• Fosfor tinggi untuk pembungaan\n\n",
    "**Tahap 3: Maintenance**\n",
    "• Pupuk cair 2 minggu sekali\n",
    "• Foliar feeding untuk boost\n",
    "• Mikronutrient sesuai kebutuhan\n\n",
    "**⏰ Timing Optimal:**\n",
    "• Pagi hari (07:00-09:00)\n",
    "• Setelah penyiraman\n",
    "• Cuaca tidak terik",
);

pub const PEST_PREVENTION_GUIDE: &str = concat!(
    "🛡️ **Strategi Pencegahan Hama Terpadu:**\n\n",
    "**Pencegahan Alami:**\n",
    "• Rotasi tanaman setiap musim\n",
    "• Companion planting (basil, marigold)\n",
    "• Habitat predator alami\n",
    "• Sanitasi lahan rutin\n\n",
    "**Monitoring Rutin:**\n",
    "• Cek tanaman setiap 2-3 hari\n",
    "• Identifikasi early warning\n",
    "• Catat populasi hama\n",
    "• Photo untuk tracking\n\n",
    "**Kontrol Organik:**\n",
    "• Neem oil untuk aphids\n",
    "• Sabun insektisida untuk kutu\n",
    "• Bt untuk ulat lepidoptera\n",
    "• Sticky trap untuk thrips\n\n",
    "**Emergency Response:**\n",
    "• Isolasi tanaman terinfeksi\n",
    "• Treatment spot application\n",
    "• Follow-up monitoring\n",
    "• Evaluasi efektivitas",
);

const DRY_SEASON_TIPS: &str = concat!(
    "☀️ **Strategi Musim Kering:**\n\n",
    "**Manajemen Air:**\n",
    "• Penyiraman 2x sehari (pagi & sore)\n",
    "• Drip irrigation untuk efisiensi\n",
    "• Mulching untuk konservasi\n",
    "• Rainwater harvesting\n\n",
    "**Pemilihan Varietas:**\n",
    "• Drought-resistant varieties\n",
    "• Short season crops\n",
    "• Deep root plants\n",
    "• Heat tolerant species\n\n",
    "**Proteksi Tanaman:**\n",
    "• Shade cloth 30-50%\n",
    "• Windbreaker installation\n",
    "• Anti-transpirant spray\n",
    "• Stress monitoring tools",
);

const WET_SEASON_TIPS: &str = concat!(
    "🌧️ **Strategi Musim Hujan:**\n\n",
    "**Manajemen Drainase:**\n",
    "• Raised beds/bedengan tinggi\n",
    "• Saluran drainase lancar\n",
    "• Avoid waterlogging\n",
    "• Mulch removal jika perlu\n\n",
    "**Pencegahan Penyakit:**\n",
    "• Fungisida preventif\n",
    "• Air circulation baik\n",
    "• Spacing optimal\n",
    "• Morning watering only\n\n",
    "**Harvest Timing:**\n",
    "• Panen sebelum hujan deras\n",
    "• Storage preparation\n",
    "• Quick drying methods\n",
    "• Post-harvest handling",
);

pub fn seasonal_tips(season: Season) -> &'static str {
    match season {
        Season::Dry => DRY_SEASON_TIPS,
        Season::Wet => WET_SEASON_TIPS,
    }
}

pub const IRRIGATION_GUIDE: &str = concat!(
    "💧 **Panduan Sistem Irigasi Optimal:**\n\n",
    "**Metode Irigasi:**\n",
    "• **Tetes**: Efisien air, cocok pot/greenhouse\n",
    "• **Sprinkler**: Coverage luas, simulasi hujan\n",
    "• **Furrow**: Traditional, cocok skala besar\n",
    "• **Sub-surface**: Langsung ke akar\n\n",
    "**Jadwal Optimal:**\n",
    "• **Pagi**: 06:00-08:00 (utama)\n",
    "• **Sore**: 16:00-18:00 (tambahan)\n",
    "• **Avoid**: 10:00-15:00 (evaporasi tinggi)\n",
    "• **Night**: Hindari (risiko jamur)\n\n",
    "**Indikator Penyiraman:**\n",
    "• Finger test: 2-3cm depth\n",
    "• Soil meter: <50% moisture\n",
    "• Plant signs: slight wilting\n",
    "• Weather: no rain forecast\n\n",
    "**Automation Tips:**\n",
    "• Timer-based untuk konsistensi\n",
    "• Sensor-based untuk presisi\n",
    "• Weather integration\n",
    "• Remote monitoring",
);

pub const NPK_SENSOR_INACTIVE: &str =
    "Sensor NPK tidak aktif. Aktifkan sensor untuk analisis real-time.";
pub const MOISTURE_SENSOR_UNAVAILABLE: &str =
    "Sensor kelembaban tidak tersedia. Cek secara manual dengan jari atau stick kayu.";
pub const ANSWER_IN_PROGRESS: &str = "Jawaban untuk pertanyaan ini sedang dikembangkan.";

pub const FAILURE_TEXT: &str =
    "Maaf, saya sedang mengalami gangguan. Silakan coba lagi dalam beberapa saat. 🤖";
pub const FAILURE_SUGGESTIONS: &[&str] = &["Kembali ke menu utama", "Coba pertanyaan lain"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seasonal_strategy_follows_season() {
        let dry = seasonal_strategy(Season::Dry);
        assert!(dry.starts_with("🌤️ **Tips Musiman (Musim Kering):**\n\n**Strategi Musim Kering:**"));
        assert!(dry.ends_with("• Harvest air hujan untuk cadangan"));

        let wet = seasonal_strategy(Season::Wet);
        assert!(wet.starts_with("🌤️ **Tips Musiman (Musim Hujan):**"));
        assert!(wet.contains("• Waspada penyakit jamur"));
    }

    #[test]
    fn test_seasonal_tips_follow_season() {
        assert!(seasonal_tips(Season::Dry).starts_with("☀️ **Strategi Musim Kering:**"));
        assert!(seasonal_tips(Season::Wet).starts_with("🌧️ **Strategi Musim Hujan:**"));
    }

    #[test]
    fn test_suggestion_lists_are_short() {
        for list in [
            NPK_ANALYSIS_SUGGESTIONS,
            NPK_INFO_SUGGESTIONS,
            MOISTURE_ANALYSIS_SUGGESTIONS,
            WATERING_INFO_SUGGESTIONS,
            FERTILIZER_SUGGESTIONS,
            PEST_SUGGESTIONS,
            WEATHER_SUGGESTIONS,
            PH_SUGGESTIONS,
            WELCOME_SUGGESTIONS,
            FAILURE_SUGGESTIONS,
        ] {
            assert!((2..=4).contains(&list.len()));
        }
    }
}
