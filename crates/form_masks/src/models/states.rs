use serde::Serialize;

/// A Brazilian federative unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StateInfo {
    pub uf: &'static str,
    pub name: &'static str,
    pub ibge_code: &'static str,
}

impl StateInfo {
    const fn new(uf: &'static str, name: &'static str, ibge_code: &'static str) -> Self {
        Self { uf, name, ibge_code }
    }

    /// Look a state up by its two-letter code, ignoring case
    pub fn by_uf(uf: &str) -> Option<&'static StateInfo> {
        STATES.iter().find(|state| state.uf.eq_ignore_ascii_case(uf.trim()))
    }
}

pub const STATES: &[StateInfo] = &[
    StateInfo::new("AC", "Acre", "12"),
    StateInfo::new("AL", "Alagoas", "27"),
    StateInfo::new("AP", "Amapá", "16"),
    StateInfo::new("AM", "Amazonas", "13"),
    StateInfo::new("BA", "Bahia", "29"),
    StateInfo::new("CE", "Ceará", "23"),
    StateInfo::new("DF", "Distrito Federal", "53"),
    StateInfo::new("ES", "Espírito Santo", "32"),
    StateInfo::new("GO", "Goiás", "52"),
    StateInfo::new("MA", "Maranhão", "21"),
    StateInfo::new("MT", "Mato Grosso", "51"),
    StateInfo::new("MS", "Mato Grosso do Sul", "50"),
    StateInfo::new("MG", "Minas Gerais", "31"),
    StateInfo::new("PA", "Pará", "15"),
    StateInfo::new("PB", "Paraíba", "25"),
    StateInfo::new("PR", "Paraná", "41"),
    StateInfo::new("PE", "Pernambuco", "26"),
    StateInfo::new("PI", "Piauí", "22"),
    StateInfo::new("RJ", "Rio de Janeiro", "33"),
    StateInfo::new("RN", "Rio Grande do Norte", "24"),
    StateInfo::new("RS", "Rio Grande do Sul", "43"),
    StateInfo::new("RO", "Rondônia", "11"),
    StateInfo::new("RR", "Roraima", "14"),
    StateInfo::new("SC", "Santa Catarina", "42"),
    StateInfo::new("SP", "São Paulo", "35"),
    StateInfo::new("SE", "Sergipe", "28"),
    StateInfo::new("TO", "Tocantins", "17"),
];
