use crate::gedcom::tokenizer::Record;
use crate::model::{FamilyModel, Individual};

/// Event sub-scope opened by `1 BIRT` / `1 DEAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    Birth,
    Death,
}

/// Where the scan currently is. Reset on every level-0 record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    Outside,
    Individual { pos: usize, event: Option<Event> },
}

/// First pass: register every `INDI` record with its name and dates.
pub fn read_individuals(records: &[Record<'_>], model: &mut FamilyModel) {
    let mut scope = Scope::Outside;

    for record in records {
        if record.level == 0 {
            scope = if record.remainder == "INDI" {
                let pos = model.insert(Individual::new(record.tag));
                Scope::Individual { pos, event: None }
            } else {
                Scope::Outside
            };
            continue;
        }

        let Scope::Individual { pos, event } = &mut scope else {
            continue;
        };
        let Some(person) = model.get_at_mut(*pos) else {
            continue;
        };

        match record.level {
            1 => {
                *event = match record.tag {
                    "BIRT" => Some(Event::Birth),
                    "DEAT" => Some(Event::Death),
                    _ => None,
                };
                if record.tag == "NAME" {
                    person.name = record.remainder.replace('/', "").trim().to_string();
                }
            }
            2 if record.tag == "DATE" => match event {
                Some(Event::Birth) => person.birth_date = record.remainder.to_string(),
                Some(Event::Death) => person.death_date = record.remainder.to_string(),
                None => {}
            },
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gedcom::tokenizer::tokenize;

    fn read(text: &str) -> FamilyModel {
        let mut model = FamilyModel::new();
        read_individuals(&tokenize(text), &mut model);
        model
    }

    #[test]
    fn other_level_one_tag_closes_event() {
        let model = read(
            "0 @I1@ INDI\n1 BIRT\n1 SEX M\n2 DATE 1 JAN 1900\n1 DEAT\n2 PLAC Oslo\n2 DATE 1970\n",
        );
        let person = model.get("@I1@").expect("person");
        assert_eq!(person.birth_date, "");
        assert_eq!(person.death_date, "1970");
    }

    #[test]
    fn level_zero_record_closes_individual() {
        let model = read("0 @I1@ INDI\n1 NAME A /B/\n0 @F1@ FAM\n1 NAME Not /Mine/\n2 DATE 1900\n");
        assert_eq!(model.get("@I1@").map(|p| p.name.as_str()), Some("A B"));
        assert_eq!(model.get("@I1@").map(|p| p.birth_date.as_str()), Some(""));
    }

    #[test]
    fn date_without_event_is_ignored() {
        let model = read("0 @I1@ INDI\n2 DATE 1900\n1 NAME X\n2 DATE 1901\n");
        let person = model.get("@I1@").expect("person");
        assert_eq!(person.birth_date, "");
        assert_eq!(person.death_date, "");
    }

    #[test]
    fn name_strips_slashes_and_outer_whitespace() {
        let model = read("0 @I1@ INDI\n1 NAME   Ola /Nordmann/  \n");
        assert_eq!(model.get("@I1@").map(|p| p.name.as_str()), Some("Ola Nordmann"));
    }

    #[test]
    fn deeper_levels_do_not_touch_event_scope() {
        let model = read("0 @I1@ INDI\n1 BIRT\n2 SOUR @S1@\n3 PAGE 12\n2 DATE ABT 1850\n");
        assert_eq!(model.get("@I1@").map(|p| p.birth_date.as_str()), Some("ABT 1850"));
    }
}
