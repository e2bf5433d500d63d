//! Answer verdict report
//!
//! Loads recorded human answers, backfills their triplet associations
//! through the two-tier resolver, and renders one verdict line per answer.

use std::path::Path;
use vizdiff_answers::{
    load_answers, with_resolved_triplets, AnswerError, CsvTripletStore, HumanAnswer,
    InMemoryTripletStore, TripletResolver,
};

/// Resolved answers plus derived verdicts
#[derive(Debug)]
pub struct AnswersReport {
    /// All answers, in file order, triplets backfilled where possible
    pub answers: Vec<HumanAnswer>,
}

impl AnswersReport {
    /// Number of answers whose chosen side disagrees with the ground truth
    #[must_use]
    pub fn wrong_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_wrong()).count()
    }

    /// Render the human-readable report the binary prints
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for answer in &self.answers {
            let verdict = match (&answer.triplet, answer.is_wrong()) {
                (None, _) => "unresolved",
                (Some(_), true) => "wrong",
                (Some(_), false) => "right",
            };
            out.push_str(&format!(
                "answer #{} user={} triplet={} side={} verdict={}\n",
                answer.id, answer.user_id, answer.triplet_id, answer.answer, verdict
            ));
        }
        out.push_str(&format!(
            "\n{} answers, {} wrong\n",
            self.answers.len(),
            self.wrong_count()
        ));
        out
    }
}

/// Build the report from an answers CSV and a triplet CSV
///
/// The primary store starts empty here — the binary has no database behind
/// it — so every association resolves through the CSV fallback, exactly the
/// path a deployment with a cold primary store exercises.
///
/// # Errors
/// Returns [`AnswerError`] when either file cannot be read.
pub fn run(answers_path: &Path, triplets_path: &Path) -> Result<AnswersReport, AnswerError> {
    let answers = load_answers(answers_path)?;
    let resolver = TripletResolver::new(
        Box::new(InMemoryTripletStore::new()),
        Box::new(CsvTripletStore::open(triplets_path)?),
    );

    let answers = with_resolved_triplets(answers, &resolver)?;
    Ok(AnswersReport { answers })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn report_counts_wrong_answers() {
        let answers = csv_file(
            "id,user_id,triplet_id,answer\n1,10,100,left\n2,10,101,right\n3,11,999,left\n",
        );
        let triplets = csv_file("id,compared_result\n100,1\n101,1\n");

        let report = run(answers.path(), triplets.path()).unwrap();
        assert_eq!(report.answers.len(), 3);
        assert_eq!(report.wrong_count(), 1); // only answer #1: left vs right-preferred

        let rendered = report.render();
        assert!(rendered.contains("answer #1 user=10 triplet=100 side=left verdict=wrong"));
        assert!(rendered.contains("answer #2 user=10 triplet=101 side=right verdict=right"));
        assert!(rendered.contains("answer #3 user=11 triplet=999 side=left verdict=unresolved"));
        assert!(rendered.contains("3 answers, 1 wrong"));
    }

    #[test]
    fn missing_triplet_file_fails() {
        let answers = csv_file("id,user_id,triplet_id,answer\n1,10,100,left\n");
        let result = run(answers.path(), Path::new("/nonexistent/triplets.csv"));
        assert!(result.is_err());
    }
}
