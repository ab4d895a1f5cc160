use crate::AllowedBounds;
use crate::CodepointTable;
use crate::Query;
use crate::Range;

/// Finds all runs of consecutive codepoints that match the query and lie within the bounds.
///
/// The resulting ranges are ascending, non-overlapping and non-adjacent.
pub fn scan(table: &CodepointTable, query: &Query, bounds: Option<AllowedBounds>) -> Vec<Range> {
    let mut ranges = Vec::new();
    let mut run_begin: Option<u32> = None;
    let mut previous = 0;
    for record in table.records() {
        let matched = query.matches(record)
            && bounds.map_or(true, |bounds| bounds.contains(record.codepoint));
        match (matched, run_begin) {
            (true, None) => run_begin = Some(record.codepoint),
            (false, Some(begin)) => {
                ranges.push(Range::new(begin, previous));
                run_begin = None;
            }
            _ => {}
        }
        previous = record.codepoint;
    }
    if let Some(begin) = run_begin {
        ranges.push(Range::new(begin, previous));
    }
    log::debug!("Query `{}` matched {} range(s)", query, ranges.len());
    ranges
}

#[cfg(test)]
mod tests {
    use arbtest::arbtest;
    use gcollections::ops::*;
    use interval::ops::Range as _;
    use interval::Interval;
    use interval::IntervalSet;

    use super::*;
    use crate::test::latin1_table;
    use crate::test::table_from_spans;
    use crate::Matcher;

    #[test]
    fn uppercase_letters() {
        let table = table_from_spans(&[(0x41, 0x5a, "Lu")]);
        let query: Query = "cat=Lu".parse().unwrap();
        assert_eq!(vec![Range::new(0x41, 0x5a)], scan(&table, &query, None));
    }

    #[test]
    fn single_codepoint() {
        let query: Query = "cp=41".parse().unwrap();
        assert_eq!(
            vec![Range::single(0x41)],
            scan(&latin1_table(), &query, None)
        );
    }

    #[test]
    fn char_range() {
        let query: Query = "ch=a-z".parse().unwrap();
        assert_eq!(
            vec![Range::new('a' as u32, 'z' as u32)],
            scan(&latin1_table(), &query, None)
        );
    }

    #[test]
    fn bounds_are_enforced() {
        let query: Query = "cat=N cat=L".parse().unwrap();
        let bounds = AllowedBounds::new(0, 0x7f);
        assert_eq!(
            vec![
                Range::new(0x30, 0x39),
                Range::new(0x41, 0x5a),
                Range::new(0x61, 0x7a),
            ],
            scan(&latin1_table(), &query, bounds)
        );
        // Without the bounds Latin-1 letters and numbers are matched as well.
        let unbounded = scan(&latin1_table(), &query, None);
        assert!(unbounded.len() > 3);
        assert!(unbounded.iter().any(|range| range.begin > 0x7f));
    }

    #[test]
    fn adjacent_matches_are_merged() {
        let table = latin1_table();
        let query: Query = "ch=a cp=62 ch=c-d cat=Lu".parse().unwrap();
        assert_eq!(
            vec![
                Range::new(0x41, 0x5a),
                Range::new(0x61, 0x64),
                Range::new(0xc0, 0xd6),
                Range::new(0xd8, 0xde),
            ],
            scan(&table, &query, None)
        );
    }

    #[test]
    fn run_at_the_end_of_the_table() {
        let table = latin1_table().restrict(0x41, 0x5a);
        let query: Query = "cat=L".parse().unwrap();
        assert_eq!(vec![Range::new(0x41, 0x5a)], scan(&table, &query, None));
        let query: Query = "cp=5a".parse().unwrap();
        assert_eq!(vec![Range::single(0x5a)], scan(&table, &query, None));
    }

    #[test]
    fn no_matches() {
        let query: Query = "cat=Zl".parse().unwrap();
        assert!(scan(&latin1_table(), &query, None).is_empty());
        assert!(scan(&CodepointTable::default(), &query, None).is_empty());
        let query: Query = "cat=L".parse().unwrap();
        assert!(scan(&latin1_table(), &query, AllowedBounds::new(0, 0x20)).is_empty());
    }

    #[test]
    fn overlapping_matchers_are_idempotent() {
        let table = latin1_table();
        let once: Query = "cat=Nd".parse().unwrap();
        let twice: Query = "cat=Nd cat=N ch=0-9 cp=30-39".parse().unwrap();
        assert_eq!(scan(&table, &once, None), scan(&table, &twice, None));
    }

    #[test]
    fn restricted_table_uses_scalar_values() {
        let table = latin1_table().restrict(0x80, 0xff);
        let query = Query::new(vec![Matcher::MajorMinorCategory(b'L', b'u')]).unwrap();
        assert_eq!(
            vec![Range::new(0xc0, 0xd6), Range::new(0xd8, 0xde)],
            scan(&table, &query, None)
        );
    }

    #[test]
    fn ranges_are_ascending_and_disjoint() {
        let table = latin1_table();
        arbtest(|u| {
            let query: Query = u.arbitrary()?;
            let bounds = if u.arbitrary()? {
                Some(u.arbitrary::<AllowedBounds>()?)
            } else {
                None
            };
            let ranges = scan(&table, &query, bounds);
            for range in ranges.iter() {
                assert!(range.begin <= range.end);
            }
            for pair in ranges.windows(2) {
                assert!(pair[0].end + 1 < pair[1].begin, "ranges = {:?}", ranges);
            }
            Ok(())
        });
    }

    #[test]
    fn same_as_interval_set() {
        let table = latin1_table();
        arbtest(|u| {
            let query: Query = u.arbitrary()?;
            let mut expected = IntervalSet::empty();
            for record in table.records() {
                if query.matches(record) {
                    expected.extend([Interval::new(record.codepoint, record.codepoint)]);
                }
            }
            let expected = expected
                .iter()
                .map(|interval| Range::new(interval.lower(), interval.upper()))
                .collect::<Vec<_>>();
            let actual = scan(&table, &query, None);
            assert_eq!(expected, actual, "query = {}", query);
            Ok(())
        });
    }
}
