use std::io::Read;

use serde::Deserialize;
use serde_json::json;

use crate::{predict, Answers, Error, InputPolicy, Stress};

/// One CSV row: an identifier plus the five answers.
#[derive(Debug, Deserialize)]
struct BulkRow {
    id: String,
    #[serde(alias = "days")]
    days_until_exam: i32,
    #[serde(alias = "hours")]
    hours_studied: i32,
    confidence: i32,
    #[serde(alias = "sleep")]
    sleep_quality: i32,
    #[serde(alias = "exams")]
    exams_this_week: i32,
}

impl From<BulkRow> for (String, Answers) {
    fn from(row: BulkRow) -> Self {
        (
            row.id,
            Answers::new(
                row.days_until_exam,
                row.hours_studied,
                row.confidence,
                row.sleep_quality,
                row.exams_this_week,
            ),
        )
    }
}

/// CSV を一括で読み込む。1 行ごとにエラーを返すので、不正な行があっても続行できる。
pub fn read_bulk<R: Read>(reader: R) -> impl Iterator<Item = Result<(String, Answers), Error>> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
        .into_deserialize::<BulkRow>()
        .map(|row| row.map(Into::into).map_err(Error::from))
}

/// Scores one row read by [`read_bulk`] and renders its output line.
///
/// The input policy runs per row, so a rejected row fails on its own.
pub fn score_row(
    row: Result<(String, Answers), Error>,
    policy: InputPolicy,
    json: bool,
) -> Result<String, Error> {
    let (id, answers) = row?;
    let prediction = predict(&policy.apply(answers)?);
    if json {
        Ok(serde_json::to_string(&json!({ "id": id, "prediction": prediction }))?)
    } else {
        Ok(format!(
            "id = {}, points = {:?}, score = {}, level = {}",
            id,
            prediction.points.scores(),
            prediction.score,
            prediction.label
        ))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Field;
    use serde_json::Value;

    #[test]
    fn test_read_bulk() {
        let data = "\
id,days_until_exam,hours_studied,confidence,sleep_quality,exams_this_week
alice,14,20,5,5,1
bob, 1, 0, 1, 1, 4
";
        let rows: Vec<_> = read_bulk(data.as_bytes()).collect::<Result<_, _>>().unwrap();
        assert_eq!(
            rows,
            vec![
                ("alice".to_string(), Answers::new(14, 20, 5, 5, 1)),
                ("bob".to_string(), Answers::new(1, 0, 1, 1, 4)),
            ]
        );
    }

    #[test]
    fn test_read_bulk_short_headers() {
        let data = "id,days,hours,confidence,sleep,exams\n7,2,3,1,1,4\n";
        let rows: Vec<_> = read_bulk(data.as_bytes()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].as_ref().unwrap().1, Answers::new(2, 3, 1, 1, 4));
    }

    #[test]
    fn test_read_bulk_bad_row_does_not_stop() {
        let data = "\
id,days,hours,confidence,sleep,exams
a,2,3,1,1,4
b,2,three,1,1,4
c,14,20,5,5,1
";
        let rows: Vec<_> = read_bulk(data.as_bytes()).collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].is_ok());
        assert!(matches!(rows[1], Err(Error::Csv(_))));
        assert!(rows[2].is_ok());
    }

    #[test]
    fn test_score_row_text() {
        let line = score_row(
            Ok(("bob".to_string(), Answers::new(1, 0, 1, 1, 4))),
            InputPolicy::PassThrough,
            false,
        )
        .unwrap();
        assert_eq!(
            line,
            "id = bob, points = [95, 85, 100, 100, 88], score = 94, level = Very High Stress"
        );
    }

    #[test]
    fn test_score_row_json() {
        let line = score_row(
            Ok(("alice".to_string(), Answers::new(14, 20, 5, 5, 1))),
            InputPolicy::PassThrough,
            true,
        )
        .unwrap();
        assert!(!line.contains('\n'));
        let value: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["id"], "alice");
        assert_eq!(value["prediction"]["score"], 16);
        assert_eq!(value["prediction"]["label"], "Low Stress");
        assert_eq!(value["prediction"]["tips"][0]["icon"], "✅");
    }

    #[test]
    fn test_score_row_policy() {
        let row = || Ok(("carol".to_string(), Answers::new(14, 20, 0, 5, 1)));
        assert!(matches!(
            score_row(row(), InputPolicy::Reject, false),
            Err(Error::OutOfRange {
                field: Field::Confidence,
                value: 0,
                ..
            })
        ));
        // confidence clamped to 1: 10 + 10 + 100 + 20 + 20
        let line = score_row(row(), InputPolicy::Clamp, false).unwrap();
        assert!(line.contains("score = 32"));
        // passed through: 10 + 10 + 120 + 20 + 20
        let line = score_row(row(), InputPolicy::PassThrough, false).unwrap();
        assert!(line.contains("score = 36"));
    }

    #[test]
    fn test_score_row_keeps_read_error() {
        let data = "id,days,hours,confidence,sleep,exams\nb,2,three,1,1,4\n";
        let row = read_bulk(data.as_bytes()).next().unwrap();
        assert!(matches!(
            score_row(row, InputPolicy::PassThrough, true),
            Err(Error::Csv(_))
        ));
    }
}
