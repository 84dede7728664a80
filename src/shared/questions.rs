use serde::Serialize;

/// Leaf question the user can pick from the menu
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredefinedQuestion {
    pub id: &'static str,
    pub question: &'static str,
    pub category: &'static str,
    pub answer_template: &'static str,
    pub follow_up_suggestions: &'static [&'static str],
}

/// Top-level menu group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionCategory {
    pub id: &'static str,
    pub question: &'static str,
    pub category: &'static str,
    pub icon: &'static str,
    pub children: &'static [PredefinedQuestion],
}

static QUESTION_CATALOG: [QuestionCategory; 4] = [
    QuestionCategory {
        id: "nutrition",
        question: "Nutrisi Tanah & NPK",
        category: "nutrition",
        icon: "Leaf",
        children: &[
            PredefinedQuestion {
                id: "npk-analysis",
                question: "Analisis NPK saat ini",
                category: "nutrition",
                answer_template: "npk_analysis",
                follow_up_suggestions: &[
                    "Cara meningkatkan nitrogen",
                    "Pupuk yang direkomendasikan",
                    "Jadwal pemupukan optimal",
                ],
            },
            PredefinedQuestion {
                id: "nutrient-deficiency",
                question: "Tanda kekurangan nutrisi",
                category: "nutrition",
                answer_template: "nutrient_deficiency",
                follow_up_suggestions: &[
                    "Solusi kekurangan nitrogen",
                    "Penanganan kekurangan fosfor",
                    "Tips meningkatkan kalium",
                ],
            },
            PredefinedQuestion {
                id: "fertilizer-guide",
                question: "Panduan pemupukan",
                category: "nutrition",
                answer_template: "fertilizer_guide",
                follow_up_suggestions: &[
                    "Dosis pupuk organik",
                    "Waktu pemupukan terbaik",
                    "Kombinasi pupuk NPK",
                ],
            },
        ],
    },
    QuestionCategory {
        id: "irrigation",
        question: "Pengairan & Kelembaban",
        category: "irrigation",
        icon: "Droplets",
        children: &[
            PredefinedQuestion {
                id: "moisture-level",
                question: "Status kelembaban tanah",
                category: "irrigation",
                answer_template: "moisture_analysis",
                follow_up_suggestions: &[
                    "Kapan waktu penyiraman",
                    "Berapa banyak air diperlukan",
                    "Sistem irigasi otomatis",
                ],
            },
            PredefinedQuestion {
                id: "irrigation-schedule",
                question: "Jadwal penyiraman optimal",
                category: "irrigation",
                answer_template: "irrigation_schedule",
                follow_up_suggestions: &[
                    "Penyiraman musim kering",
                    "Penyiraman musim hujan",
                    "Teknik hemat air",
                ],
            },
            PredefinedQuestion {
                id: "water-quality",
                question: "Kualitas air untuk irigasi",
                category: "irrigation",
                answer_template: "water_quality",
                follow_up_suggestions: &[
                    "pH air optimal",
                    "Filter air sederhana",
                    "Air hujan vs air tanah",
                ],
            },
        ],
    },
    QuestionCategory {
        id: "pest-disease",
        question: "Hama & Penyakit",
        category: "pest",
        icon: "Zap",
        children: &[
            PredefinedQuestion {
                id: "pest-prevention",
                question: "Pencegahan hama",
                category: "pest",
                answer_template: "pest_prevention",
                follow_up_suggestions: &[
                    "Pestisida organik",
                    "Tanaman pengusir hama",
                    "Monitoring hama rutin",
                ],
            },
            PredefinedQuestion {
                id: "disease-identification",
                question: "Identifikasi penyakit tanaman",
                category: "pest",
                answer_template: "disease_identification",
                follow_up_suggestions: &[
                    "Penyakit daun menguning",
                    "Busuk akar penanganan",
                    "Jamur pada tanaman",
                ],
            },
        ],
    },
    QuestionCategory {
        id: "weather-climate",
        question: "Cuaca & Musim",
        category: "weather",
        icon: "Sun",
        children: &[
            PredefinedQuestion {
                id: "seasonal-tips",
                question: "Tips berdasarkan musim",
                category: "weather",
                answer_template: "seasonal_tips",
                follow_up_suggestions: &[
                    "Persiapan musim hujan",
                    "Adaptasi musim kering",
                    "Optimasi cuaca ekstrem",
                ],
            },
            PredefinedQuestion {
                id: "climate-adaptation",
                question: "Adaptasi perubahan iklim",
                category: "weather",
                answer_template: "climate_adaptation",
                follow_up_suggestions: &[
                    "Varietas tahan panas",
                    "Teknik konservasi air",
                    "Greenhouse sederhana",
                ],
            },
        ],
    },
];

pub fn predefined_questions() -> &'static [QuestionCategory] {
    &QUESTION_CATALOG
}

pub fn find_question(question_id: &str) -> Option<&'static PredefinedQuestion> {
    QUESTION_CATALOG
        .iter()
        .flat_map(|category| category.children.iter())
        .find(|question| question.id == question_id)
}
