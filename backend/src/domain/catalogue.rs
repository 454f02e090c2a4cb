//! Static catalogue of explainability techniques.

use serde::Serialize;

/// Descriptor of a cataloged explainability technique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Technique {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub summary: &'static str,
}

const TECHNIQUES: [Technique; 4] = [
    Technique {
        id: "shap",
        name: "SHAP",
        kind: "global-local",
        summary: "Atribuye el peso de cada variable a cada predicción y al comportamiento global.",
    },
    Technique {
        id: "lime",
        name: "LIME",
        kind: "local",
        summary: "Explica decisiones concretas con un modelo local aproximado alrededor del caso.",
    },
    Technique {
        id: "counterfactual",
        name: "Counterfactual",
        kind: "recourse",
        summary: "Muestra qué cambios mínimos podrían alterar una decisión negativa.",
    },
    Technique {
        id: "pdp-ice",
        name: "PDP/ICE",
        kind: "global",
        summary: "Describe cómo cambia la salida del modelo cuando varían las variables.",
    },
];

/// Every technique in catalogue order.
pub fn techniques() -> &'static [Technique] {
    &TECHNIQUES
}
