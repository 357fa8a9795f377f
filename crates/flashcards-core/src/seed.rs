//! Example questions for a brand-new database

use flashcards_questions::NewQuestion;

pub fn example_questions() -> Vec<NewQuestion> {
    vec![
        NewQuestion::new(
            "Quanto vale \\( \\frac{1}{2} + \\frac{3}{4} \\)?",
            "Il risultato è \\( \\frac{5}{4} \\).",
            "Frazioni",
            "Matematica",
        ),
        NewQuestion::new(
            "Qual è la derivata di \\( \\sin(x) \\) ?",
            "La derivata di \\( \\sin(x) \\) è \\( \\cos(x) \\)",
            "Derivate",
            "Analisi",
        ),
    ]
}
