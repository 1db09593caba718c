//! Built-in catalog of essay prompts.

use chrono::Datelike;
use serde::Serialize;
use std::fmt;

pub const FREE_THEME_ID: &str = "tema-livre";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edition {
    /// Prompt from a past exam.
    Exam(i32),
    /// Practice prompt for the running year.
    Practice,
    /// Unpublished prompt written for practice.
    Unreleased,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub id: &'static str,
    pub edition: Edition,
    pub axis: &'static str,
    pub difficulty: Difficulty,
    pub title: &'static str,
    pub motivation_texts: &'static [&'static str],
}

impl Theme {
    pub fn year_label(&self, current_year: i32) -> String {
        match self.edition {
            Edition::Exam(year) => year.to_string(),
            Edition::Practice => current_year.to_string(),
            Edition::Unreleased => format!("{current_year} (unreleased)"),
        }
    }

    pub fn summary(&self) -> ThemeSummary {
        ThemeSummary {
            id: self.id.to_string(),
            title: self.title.to_string(),
            year: self.year_label(current_year()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeSummary {
    pub id: String,
    pub title: String,
    pub year: String,
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

pub fn all_themes() -> &'static [Theme] {
    THEMES
}

pub fn find_theme(id: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|theme| theme.id.eq_ignore_ascii_case(id))
}

static THEMES: &[Theme] = &[
    Theme {
        id: FREE_THEME_ID,
        edition: Edition::Practice,
        axis: "Geral",
        difficulty: Difficulty::Medium,
        title: "Tema Livre (Escolha seu próprio tema)",
        motivation_texts: &[
            "Neste modo, você pode praticar sobre qualquer assunto.",
            "A IA avaliará sua estrutura dissertativa, coesão, gramática e proposta de intervenção de forma genérica.",
            "Lembre-se de manter a estrutura de introdução, desenvolvimento e conclusão.",
        ],
    },
    Theme {
        id: "enem-2023",
        edition: Edition::Exam(2023),
        axis: "Social",
        difficulty: Difficulty::Hard,
        title: "Desafios para o enfrentamento da invisibilidade do trabalho de cuidado realizado pela mulher no Brasil",
        motivation_texts: &[
            "O trabalho de cuidado não remunerado é essencial para a manutenção da sociedade, mas permanece invisível.",
            "Dados do IBGE mostram que mulheres dedicam quase o dobro de tempo que homens a afazeres domésticos.",
            "A divisão sexual do trabalho sobrecarrega a saúde mental feminina.",
        ],
    },
    Theme {
        id: "enem-2022",
        edition: Edition::Exam(2022),
        axis: "Ambiental / Social",
        difficulty: Difficulty::Medium,
        title: "Desafios para a valorização de comunidades e povos tradicionais no Brasil",
        motivation_texts: &[
            "O Brasil possui vasta diversidade cultural com povos indígenas, quilombolas e ribeirinhos.",
            "O direito à terra é o pilar fundamental para a sobrevivência dessas culturas.",
            "A exploração econômica predatória ameaça o modo de vida tradicional.",
        ],
    },
    Theme {
        id: "inedito-1",
        edition: Edition::Unreleased,
        axis: "Saúde / Tecnologia",
        difficulty: Difficulty::Medium,
        title: "Impactos da inteligência artificial na preservação da privacidade do cidadão brasileiro",
        motivation_texts: &[
            "O avanço das IAs permite o processamento massivo de dados pessoais sem consentimento claro.",
            "A LGPD (Lei Geral de Proteção de Dados) é um avanço, mas a tecnologia corre mais rápido que a lei.",
            "Reconhecimento facial em espaços públicos gera debates sobre vigilância e liberdade.",
        ],
    },
    Theme {
        id: "inedito-4",
        edition: Edition::Unreleased,
        axis: "Educação",
        difficulty: Difficulty::Easy,
        title: "A importância da educação financeira na formação básica do cidadão brasileiro",
        motivation_texts: &[
            "O endividamento das famílias brasileiras atinge níveis recordes históricos.",
            "A falta de planejamento financeiro compromete a qualidade de vida a longo prazo.",
            "Escolas que implementam educação financeira preparam jovens mais conscientes sobre consumo.",
        ],
    },
    Theme {
        id: "inedito-9",
        edition: Edition::Unreleased,
        axis: "Tecnologia / Política",
        difficulty: Difficulty::Hard,
        title: "O impacto das fake news na integridade do processo democrático e eleitoral",
        motivation_texts: &[
            "Desinformação em massa altera a percepção pública sobre candidatos e instituições.",
            "Algoritmos de redes sociais criam bolhas que reforçam crenças sem verificação de fatos.",
            "A justiça eleitoral enfrenta o desafio de combater mentiras em tempo real durante campanhas.",
        ],
    },
    Theme {
        id: "enem-2021",
        edition: Edition::Exam(2021),
        axis: "Cidadania",
        difficulty: Difficulty::Easy,
        title: "Invisibilidade e registro civil: garantia de acesso à cidadania no Brasil",
        motivation_texts: &[
            "Milhares de brasileiros não possuem certidão de nascimento, tornando-os 'invisíveis' ao Estado.",
            "Sem documentos, é impossível acessar vacinação, escola ou programas sociais.",
            "O registro civil é a porta de entrada para todos os outros direitos fundamentais.",
        ],
    },
];
