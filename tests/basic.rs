use deduction_lint::{
    config::Config,
    context::Context,
    reports::{LintReport, Report},
    structures::{
        document::Document,
        expression::{Expr, Expression},
        flag::FlagKind,
        line::{Label, Line, LogicLine, Rule},
    },
    types::err::{self},
};

fn letter(symbol: char) -> Expr {
    Expression::letter(symbol)
}

fn pred(name: char, args: &str) -> Expr {
    Expression::predicate(name, args.chars().map(Expression::letter).collect())
}

fn line<const N: usize>(label: Label, expression: Expr, deps: [Label; N], rule: Rule) -> Line {
    Line::Logic(LogicLine::new(label, expression, deps, rule))
}

fn check(lines: Vec<Line>) -> LintReport {
    let mut the_context = Context::from_config(Config::default());
    the_context
        .check(Document::from(lines))
        .expect("well-formed labels")
}

fn kinds(report: &LintReport, position: usize) -> Vec<FlagKind> {
    report.flags[position].iter().map(|flag| flag.kind).collect()
}

mod basic {
    use super::*;

    #[test]
    fn premise() {
        let report = check(vec![line(1, letter('A'), [1], Rule::Premise)]);
        assert_eq!(kinds(&report, 0), vec![FlagKind::Good]);
        assert_eq!(report.report(), Report::Good);
    }

    #[test]
    fn premise_with_extra_dependency() {
        let report = check(vec![
            line(1, letter('A'), [1], Rule::Premise),
            line(2, letter('B'), [1, 2], Rule::Premise),
        ]);
        assert_eq!(kinds(&report, 1), vec![FlagKind::ExtraDependency]);
        assert_eq!(report.report(), Report::Problems);
    }

    #[test]
    fn comments() {
        let report = check(vec![
            Line::Text("-- a comment".to_string()),
            line(1, letter('A'), [1], Rule::Premise),
            Line::Text(String::new()),
        ]);

        assert_eq!(kinds(&report, 0), vec![FlagKind::Comment]);
        assert_eq!(kinds(&report, 2), vec![FlagKind::Comment]);
        assert_eq!(report.report(), Report::Good);
        assert_eq!(report.counters.lines, 3);
        assert_eq!(report.counters.logic_lines, 1);
    }

    #[test]
    fn unrecognized_rule() {
        let report = check(vec![line(1, letter('A'), [1], Rule::Unrecognized("MP".to_string()))]);
        assert_eq!(kinds(&report, 0), vec![FlagKind::Unrecognized]);
        assert_eq!(
            report.flags[0][0].text.as_deref(),
            Some("The rule MP is not recognized.")
        );
    }

    #[test]
    fn forward_dependency() {
        let report = check(vec![
            line(1, letter('A'), [1], Rule::Premise),
            line(2, letter('A'), [1], Rule::TruthFunctional { cited: vec![3] }),
            line(3, letter('A'), [1], Rule::TruthFunctional { cited: vec![1] }),
        ]);

        assert_eq!(kinds(&report, 1)[0], FlagKind::ForwardDependency);
        assert_eq!(
            report.flags[1][0].text.as_deref(),
            Some("(1) depends on (2), which cannot occur after it.")
        );
        assert_eq!(kinds(&report, 2), vec![FlagKind::Good]);
    }

    #[test]
    fn letter_conflict() {
        let doubly_bound = Expression::universal('x', Expression::universal('x', pred('F', "x")));
        let report = check(vec![line(1, doubly_bound, [1], Rule::Premise)]);

        assert_eq!(kinds(&report, 0), vec![FlagKind::LetterConflict, FlagKind::Good]);
        assert_eq!(report.report(), Report::Problems);
    }

    #[test]
    fn duplicate_label() {
        let mut the_context = Context::from_config(Config::default());
        let document = Document::from(vec![
            line(1, letter('A'), [1], Rule::Premise),
            line(1, letter('B'), [1], Rule::Premise),
        ]);

        assert_eq!(
            the_context.check(document).err(),
            Some(err::ErrorKind::Structural(err::StructuralError::DuplicateLabel {
                position: 1,
                label: 1
            }))
        );
    }

    #[test]
    fn label_limit() {
        let mut config = Config::default();
        assert!(config.label_limit.set(10).is_ok());
        let mut the_context = Context::from_config(config);

        let document = Document::from(vec![line(11, letter('A'), [11], Rule::Premise)]);
        assert!(matches!(
            the_context.check(document),
            Err(err::ErrorKind::Structural(err::StructuralError::LabelOutOfRange { .. }))
        ));
    }

    #[test]
    fn counters_accumulate() {
        let mut the_context = Context::from_config(Config::default());
        for _ in 0..2 {
            let document = Document::from(vec![line(1, letter('A'), [1], Rule::Premise)]);
            assert!(the_context.check(document).is_ok());
        }
        assert_eq!(the_context.counters.good, 2);
        assert_eq!(the_context.counters.logic_lines, 2);
    }
}

mod discharge {
    use super::*;

    fn base() -> Vec<Line> {
        let a = letter('A');
        let b = letter('B');
        vec![
            line(1, a.clone(), [1], Rule::Premise),
            line(2, b.clone(), [2], Rule::Premise),
            line(
                3,
                Expression::conjunction(vec![a, b]),
                [1, 2],
                Rule::TruthFunctional { cited: vec![1, 2] },
            ),
        ]
    }

    #[test]
    fn good() {
        let mut lines = base();
        let expected = Expression::conditional(
            letter('B'),
            Expression::conjunction(vec![letter('A'), letter('B')]),
        );
        lines.push(line(4, expected, [1], Rule::Discharge { cited: 3, discharged: 2 }));

        let report = check(lines);
        assert_eq!(kinds(&report, 3), vec![FlagKind::Good]);
        assert_eq!(report.report(), Report::Good);
    }

    #[test]
    fn premise_not_present() {
        let mut lines = base();
        let expression = Expression::conditional(letter('B'), letter('A'));
        lines.push(line(4, expression, [1], Rule::Discharge { cited: 1, discharged: 2 }));

        let report = check(lines);
        assert_eq!(kinds(&report, 3), vec![FlagKind::Incorrect]);
        assert_eq!(
            report.flags[3][0].text.as_deref(),
            Some("(0) must have premise [1] to invoke D.")
        );
    }

    #[test]
    fn wrong_expression() {
        let mut lines = base();
        let expression = Expression::conditional(letter('A'), letter('B'));
        lines.push(line(4, expression, [1], Rule::Discharge { cited: 3, discharged: 2 }));

        let report = check(lines);
        assert_eq!(kinds(&report, 3), vec![FlagKind::Incorrect]);
    }

    #[test]
    fn discharged_premise_kept() {
        let mut lines = base();
        let expected = Expression::conditional(
            letter('B'),
            Expression::conjunction(vec![letter('A'), letter('B')]),
        );
        lines.push(line(4, expected, [1, 2], Rule::Discharge { cited: 3, discharged: 2 }));

        let report = check(lines);
        assert_eq!(kinds(&report, 3), vec![FlagKind::ExtraDependency]);
    }
}

mod truth_functional {
    use super::*;

    fn modus_ponens_lines() -> Vec<Line> {
        let p = letter('P');
        let q = letter('Q');
        vec![
            line(1, Expression::conditional(p.clone(), q.clone()), [1], Rule::Premise),
            line(2, p, [2], Rule::Premise),
            line(3, q, [1, 2], Rule::TruthFunctional { cited: vec![1, 2] }),
        ]
    }

    #[test]
    fn modus_ponens() {
        let report = check(modus_ponens_lines());
        assert_eq!(kinds(&report, 2), vec![FlagKind::Good]);
        assert_eq!(
            report.flags[2][0].text.as_deref(),
            Some("TF solver confirms this is correct.")
        );
        assert_eq!(report.counters.truth_functional, 1);
    }

    #[test]
    fn missing_dependency() {
        let mut lines = modus_ponens_lines();
        lines[2] = line(3, letter('Q'), [1], Rule::TruthFunctional { cited: vec![1, 2] });

        let report = check(lines);
        assert_eq!(kinds(&report, 2), vec![FlagKind::MissingDependency]);
        assert_eq!(report.flags[2][0].text.as_deref(), Some("Missing premise [1]"));
    }

    #[test]
    fn unconfirmed() {
        let mut lines = modus_ponens_lines();
        lines[2] = line(3, letter('R'), [1, 2], Rule::TruthFunctional { cited: vec![1, 2] });

        let report = check(lines);
        assert_eq!(kinds(&report, 2), vec![FlagKind::TFWarning]);
    }

    #[test]
    fn depth() {
        let a = letter('A');
        let b = letter('B');
        let c = letter('C');
        let lines = vec![
            line(1, Expression::conjunction(vec![a.clone(), b]), [1], Rule::Premise),
            line(2, Expression::conditional(a, c.clone()), [2], Rule::Premise),
            line(3, c, [1, 2], Rule::TruthFunctional { cited: vec![1, 2] }),
        ];

        let report = check(lines.clone());
        assert_eq!(kinds(&report, 2), vec![FlagKind::Good]);

        let mut config = Config::default();
        assert!(config.truth_functional_depth.set(1).is_ok());
        let mut the_context = Context::from_config(config);
        let report = the_context.check(Document::from(lines)).expect("checked");
        assert_eq!(kinds(&report, 2), vec![FlagKind::TFWarning]);
    }

    #[test]
    fn no_citations() {
        let report = check(vec![
            line(1, letter('A'), [1], Rule::Premise),
            line(2, letter('A'), [], Rule::TruthFunctional { cited: vec![] }),
        ]);
        assert_eq!(kinds(&report, 1), vec![FlagKind::TFError]);
    }
}

mod change_of_quantifier {
    use super::*;

    fn cq(from: Expr, to: Expr) -> Vec<FlagKind> {
        let report = check(vec![
            line(1, from, [1], Rule::Premise),
            line(2, to, [1], Rule::ChangeOfQuantifier { cited: 1 }),
        ]);
        kinds(&report, 1)
    }

    #[test]
    fn negated_universal() {
        let from = Expression::negation(Expression::universal('x', pred('F', "x")));
        let to = Expression::existential('x', Expression::negation(pred('F', "x")));
        assert_eq!(cq(from.clone(), to.clone()), vec![FlagKind::Good]);
        assert_eq!(cq(to, from), vec![FlagKind::Good]);
    }

    #[test]
    fn negated_existential_run() {
        let from = Expression::negation(Expression::quantifier(
            &[(false, 'x'), (false, 'y')],
            pred('F', "xy"),
        ));
        let to = Expression::quantifier(
            &[(true, 'x'), (true, 'y')],
            Expression::negation(pred('F', "xy")),
        );
        assert_eq!(cq(from, to), vec![FlagKind::Good]);
    }

    #[test]
    fn same_quantifier() {
        let from = Expression::negation(Expression::universal('x', pred('F', "x")));
        let to = Expression::universal('x', Expression::negation(pred('F', "x")));
        assert_eq!(cq(from, to), vec![FlagKind::Incorrect]);
    }

    #[test]
    fn outer_double_negation() {
        let from = Expression::negation(Expression::existential(
            'x',
            Expression::negation(pred('G', "x")),
        ));
        let to = Expression::universal('x', pred('G', "x"));
        assert_eq!(cq(from.clone(), to.clone()), vec![FlagKind::Good]);
        assert_eq!(cq(to, from), vec![FlagKind::Good]);
    }

    #[test]
    fn reordered_letters() {
        let from = Expression::negation(Expression::quantifier(
            &[(true, 'x'), (true, 'y')],
            pred('F', "xy"),
        ));
        let to = Expression::quantifier(
            &[(false, 'y'), (false, 'x')],
            Expression::negation(pred('F', "xy")),
        );

        let report = check(vec![
            line(1, from, [1], Rule::Premise),
            line(2, to, [1], Rule::ChangeOfQuantifier { cited: 1 }),
        ]);
        assert_eq!(kinds(&report, 1), vec![FlagKind::Incorrect]);
        assert_eq!(
            report.flags[1][0].text.as_deref(),
            Some("CQ must preserve the letters and their order.")
        );
    }

    #[test]
    fn missing_negation() {
        let from = Expression::universal('x', pred('F', "x"));
        let to = Expression::existential('x', pred('F', "x"));
        assert_eq!(cq(from, to), vec![FlagKind::Incorrect]);
    }
}

mod universal {
    use super::*;

    #[test]
    fn instantiation() {
        let report = check(vec![
            line(1, Expression::universal('x', pred('F', "x")), [1], Rule::Premise),
            line(2, pred('F', "a"), [1], Rule::UniversalInstantiation { cited: 1 }),
        ]);
        assert_eq!(kinds(&report, 1), vec![FlagKind::Good]);
        assert_eq!(
            report.flags[1][0].text.as_deref(),
            Some("Possible assignment: x → a.")
        );
    }

    #[test]
    fn partial_instantiation() {
        let both = Expression::quantifier(&[(true, 'x'), (true, 'y')], pred('F', "xy"));
        let partial = Expression::universal('y', pred('F', "ay"));

        let report = check(vec![
            line(1, both, [1], Rule::Premise),
            line(2, partial, [1], Rule::UniversalInstantiation { cited: 1 }),
        ]);
        assert_eq!(kinds(&report, 1), vec![FlagKind::Good]);
    }

    #[test]
    fn instantiation_of_non_universal() {
        let report = check(vec![
            line(1, pred('F', "a"), [1], Rule::Premise),
            line(2, pred('F', "a"), [1], Rule::UniversalInstantiation { cited: 1 }),
        ]);
        assert_eq!(kinds(&report, 1), vec![FlagKind::Incorrect]);
    }

    #[test]
    fn instantiation_without_assignment() {
        let report = check(vec![
            line(1, Expression::universal('x', pred('F', "x")), [1], Rule::Premise),
            line(2, pred('G', "a"), [1], Rule::UniversalInstantiation { cited: 1 }),
        ]);
        assert_eq!(kinds(&report, 1), vec![FlagKind::Incorrect]);
        assert_eq!(
            report.flags[1][0].text.as_deref(),
            Some("There is no possible assignment for x that leads to this sentence.")
        );
    }

    #[test]
    fn generalization() {
        let report = check(vec![
            line(1, Expression::universal('y', pred('F', "y")), [1], Rule::Premise),
            line(2, pred('F', "a"), [1], Rule::UniversalInstantiation { cited: 1 }),
            line(3, Expression::universal('x', pred('F', "x")), [1], Rule::UniversalGeneralization { cited: 2 }),
        ]);
        assert_eq!(kinds(&report, 2), vec![FlagKind::Good]);
        assert_eq!(report.report(), Report::Good);
    }

    #[test]
    fn generalization_over_premise_letter() {
        let report = check(vec![
            line(1, pred('F', "a"), [1], Rule::Premise),
            line(2, Expression::universal('x', pred('F', "x")), [1], Rule::UniversalGeneralization { cited: 1 }),
        ]);
        assert_eq!(kinds(&report, 1), vec![FlagKind::Incorrect]);
        assert_eq!(
            report.flags[1][0].text.as_deref(),
            Some("a must not be free in any premise. a is free in (0).")
        );
    }

    #[test]
    fn generalization_picks_fresh_candidate() {
        // From Fa ∧ Fb either letter may be generalized, and only b is fresh.
        let premise = Expression::universal(
            'y',
            Expression::conjunction(vec![pred('F', "a"), pred('F', "y")]),
        );
        let instance = Expression::conjunction(vec![pred('F', "a"), pred('F', "b")]);
        let general = Expression::universal(
            'x',
            Expression::conjunction(vec![pred('F', "x"), pred('F', "b")]),
        );

        let report = check(vec![
            line(1, premise, [1], Rule::Premise),
            line(2, instance, [1], Rule::UniversalInstantiation { cited: 1 }),
            line(3, general, [1], Rule::UniversalGeneralization { cited: 2 }),
        ]);
        assert_eq!(kinds(&report, 2), vec![FlagKind::Good]);
        assert_eq!(
            report.flags[2][0].text.as_deref(),
            Some("Possible assignment: b → x.")
        );
    }

    #[test]
    fn generalization_splitting() {
        let report = check(vec![
            line(1, Expression::universal('z', pred('F', "zz")), [1], Rule::Premise),
            line(2, pred('F', "aa"), [1], Rule::UniversalInstantiation { cited: 1 }),
            line(
                3,
                Expression::quantifier(&[(true, 'x'), (true, 'y')], pred('F', "xy")),
                [1],
                Rule::UniversalGeneralization { cited: 2 },
            ),
        ]);
        assert_eq!(kinds(&report, 2), vec![FlagKind::Incorrect]);
    }
}

mod existential {
    use super::*;

    #[test]
    fn generalization() {
        let report = check(vec![
            line(1, pred('F', "a"), [1], Rule::Premise),
            line(2, Expression::existential('x', pred('F', "x")), [1], Rule::ExistentialGeneralization { cited: 1 }),
        ]);
        assert_eq!(kinds(&report, 1), vec![FlagKind::Good]);
    }

    #[test]
    fn generalization_without_source() {
        let report = check(vec![
            line(1, pred('F', "a"), [1], Rule::Premise),
            line(2, Expression::existential('x', pred('G', "x")), [1], Rule::ExistentialGeneralization { cited: 1 }),
        ]);
        assert_eq!(kinds(&report, 1), vec![FlagKind::Incorrect]);
    }

    fn instantiation_lines() -> Vec<Line> {
        vec![
            line(1, Expression::existential('x', pred('F', "x")), [1], Rule::Premise),
            line(
                2,
                pred('F', "a"),
                [1, 2],
                Rule::ExistentialInstantiationIntro {
                    cited: 1,
                    instantial: 'a',
                },
            ),
            line(
                3,
                Expression::existential('y', pred('F', "y")),
                [1, 2],
                Rule::ExistentialGeneralization { cited: 2 },
            ),
        ]
    }

    #[test]
    fn instantiation() {
        let mut lines = instantiation_lines();
        lines.push(line(
            4,
            Expression::existential('y', pred('F', "y")),
            [1],
            Rule::ExistentialInstantiationElim {
                cited: 3,
                discharged: 2,
            },
        ));

        let report = check(lines);
        for position in 0..4 {
            assert_eq!(kinds(&report, position), vec![FlagKind::Good]);
        }
    }

    #[test]
    fn introduction_requires_own_premise() {
        let mut lines = instantiation_lines();
        lines[1] = line(
            2,
            pred('F', "a"),
            [1],
            Rule::ExistentialInstantiationIntro {
                cited: 1,
                instantial: 'a',
            },
        );

        let report = check(lines);
        assert_eq!(kinds(&report, 1), vec![FlagKind::MissingDependency]);
    }

    #[test]
    fn introduction_of_used_letter() {
        let report = check(vec![
            line(1, pred('G', "a"), [1], Rule::Premise),
            line(2, Expression::existential('x', pred('F', "x")), [2], Rule::Premise),
            line(
                3,
                pred('F', "a"),
                [2, 3],
                Rule::ExistentialInstantiationIntro {
                    cited: 2,
                    instantial: 'a',
                },
            ),
        ]);
        assert_eq!(kinds(&report, 2), vec![FlagKind::Incorrect]);
    }

    #[test]
    fn introduction_with_wrong_instance() {
        let report = check(vec![
            line(1, Expression::existential('x', pred('F', "x")), [1], Rule::Premise),
            line(
                2,
                pred('F', "b"),
                [1, 2],
                Rule::ExistentialInstantiationIntro {
                    cited: 1,
                    instantial: 'a',
                },
            ),
        ]);
        assert_eq!(kinds(&report, 1), vec![FlagKind::Incorrect]);
        assert_eq!(
            report.flags[1][0].text.as_deref(),
            Some("The expression within the quantifier is incorrect. Expected: Fa")
        );
    }

    #[test]
    fn elimination_of_non_introduction() {
        let report = check(vec![
            line(1, letter('A'), [1], Rule::Premise),
            line(2, letter('B'), [2], Rule::Premise),
            line(
                3,
                Expression::conjunction(vec![letter('A'), letter('B')]),
                [1, 2],
                Rule::TruthFunctional { cited: vec![1, 2] },
            ),
            line(
                4,
                Expression::conjunction(vec![letter('A'), letter('B')]),
                [1],
                Rule::ExistentialInstantiationElim {
                    cited: 3,
                    discharged: 2,
                },
            ),
        ]);
        assert_eq!(kinds(&report, 3), vec![FlagKind::Incorrect]);
        assert_eq!(
            report.flags[3][0].text.as_deref(),
            Some("The discharged premise [1], is not an EII line.")
        );
    }

    #[test]
    fn elimination_from_independent_line() {
        let mut lines = instantiation_lines();
        lines.truncate(2);
        lines.push(line(3, pred('G', "b"), [3], Rule::Premise));
        lines.push(line(
            4,
            pred('G', "b"),
            [3],
            Rule::ExistentialInstantiationElim {
                cited: 3,
                discharged: 2,
            },
        ));

        let report = check(lines);
        assert_eq!(kinds(&report, 3), vec![FlagKind::Incorrect]);
        assert_eq!(
            report.flags[3][0].text.as_deref(),
            Some("The cited line (2) does not have required premise [1].")
        );
    }

    #[test]
    fn elimination_with_instantial_letter_free() {
        let mut lines = instantiation_lines();
        lines.push(line(4, pred('G', "a"), [4], Rule::Premise));
        lines.push(line(
            5,
            Expression::conjunction(vec![pred('F', "a"), pred('G', "a")]),
            [1, 2, 4],
            Rule::TruthFunctional { cited: vec![2, 4] },
        ));
        lines.push(line(
            6,
            Expression::conjunction(vec![pred('F', "a"), pred('G', "a")]),
            [1, 4],
            Rule::ExistentialInstantiationElim {
                cited: 5,
                discharged: 2,
            },
        ));

        let report = check(lines);
        assert_eq!(kinds(&report, 4), vec![FlagKind::Good]);
        assert_eq!(kinds(&report, 5), vec![FlagKind::Incorrect]);
        assert_eq!(
            report.flags[5][0].text.as_deref(),
            Some("a must not be free in any premise of this line. a is free in (3).")
        );
    }
}
