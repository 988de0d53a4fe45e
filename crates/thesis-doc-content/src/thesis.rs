//! The thesis proposal document.

use crate::model::Inline::{Code, Strong, Text};
use crate::model::{Column, Document, Footer, Header, Note, NoteTone, RichText, Section, SectionBody};

const THESIS_STATEMENT: RichText = &[
    Text("In this project, we will focus on the following thesis: "),
    Strong(
        "Agentic AI in the physical and digital protection of neighborhood substation \
         transformers would decrease incident response time by 10%.",
    ),
    Text(
        " Substations are critical nodes in the energy grid, yet they remain vulnerable to both \
         cyberattacks and physical disruptions. By deploying AI agents capable of real-time \
         monitoring, anomaly detection, and automated response coordination, utilities can \
         strengthen defensive measures and reduce the lag between detection and remediation.",
    ),
];

const OUTLINE: &[RichText] = &[
    &[
        Strong("Introduction & Motivation"),
        Text(" — state of substations, threat surface, and why response time matters."),
    ],
    &[
        Strong("Related Work"),
        Text(" — agentic AI, grid security, power system monitoring, co-simulation approaches."),
    ],
    &[
        Strong("Problem & Thesis"),
        Text(" — formalize the 10% response-time reduction hypothesis and defense posture."),
    ],
    &[
        Strong("Methodology"),
        Text(" — co-simulation architecture, datasets, metrics, and experimental design."),
    ],
    &[
        Strong("Simulations & Experiments"),
        Text(
            " — power-flow scenarios, communication/latency tests, cyber-physical attack injects.",
        ),
    ],
    &[
        Strong("Results & Analysis"),
        Text(" — performance, sensitivity, limitations."),
    ],
    &[
        Strong("Proposed Solutions"),
        Text(" — agent designs, deployment patterns, recommended operational changes."),
    ],
    &[
        Strong("Conclusions & Future Work"),
        Text(" — roadmap to real-world trials and extension beyond neighborhood substations."),
    ],
];

const POWER_SYSTEM: Column = Column {
    title: "Power-system modelling",
    items: &[
        &[
            Strong("pandapower"),
            Text(
                " (Python) — model the neighborhood distribution topology, run steady-state \
                 power flow and contingency analyses, place transformers/substations, and \
                 emulate faults and load variations.",
            ),
        ],
        &[
            Strong("GridLAB-D"),
            Text(
                " (optional/alternative) — detailed distribution system modeling \
                 (equipment-level behavior, time-series simulations) and validation of \
                 pandapower scenarios.",
            ),
        ],
    ],
};

const COMMUNICATION: Column = Column {
    title: "Communication & control simulation",
    items: &[
        &[
            Strong("EXATA"),
            Text(
                " — simulate the communication between grid controllers, RTUs/IEDs, and agentic \
                 AI controllers; measure latency, packet loss, and how these affect anomaly \
                 detection & orchestrated responses.",
            ),
        ],
        &[Text(
            "Model controller placements, SCADA/DER communications, and realistic network \
             topologies (wired/radio links).",
        )],
    ],
};

const EXPERIMENTS: &[RichText] = &[
    &[
        Strong("Baseline:"),
        Text(
            " no agentic AI. Measure detection-to-start-of-response time across injected events \
             (physical disturbance, fault, or simulated cyber compromise).",
        ),
    ],
    &[
        Strong("Agentic AI enabled:"),
        Text(
            " agents run distributed on edge/controllers; measure detection, decision, and \
             orchestration latency. Compare response-time improvement (target: 10% reduction).",
        ),
    ],
    &[
        Strong("Network stress tests:"),
        Text(
            " vary latency/packet-loss in EXATA and measure downstream effects on response time \
             and false positives/negatives.",
        ),
    ],
    &[
        Strong("Power impact:"),
        Text(
            " use pandapower to quantify how faster responses reduce the area/extent/duration of \
             voltage violations, thermal overloads, and unserved load.",
        ),
    ],
];

const SOLUTIONS: &[RichText] = &[
    &[Text(
        "Quantitative evidence that agentic coordination shortens detection-to-remediation \
         latency and the conditions where ~10% improvement is achievable.",
    )],
    &[Text(
        "Design patterns for placement of agents (edge vs centralized) and communication \
         reliability requirements (max latency, acceptable packet loss).",
    )],
    &[Text(
        "Response-playbooks (automated isolation, reconfiguration, dispatch of on-call crews) \
         and safe rollback strategies.",
    )],
    &[Text(
        "Failure-mode analysis documenting where AI agents degrade performance or introduce \
         risks (false positives, cascading actions).",
    )],
    &[Text(
        "Reproducible scripts & notebooks to reproduce power-flow and comms scenarios, plus \
         result dashboards (CSV/JSON + small visualizations).",
    )],
];

/// Suggested repository tree. Whitespace is significant.
pub const REPOSITORY_LAYOUT: &str = "/agentic-ai-thesis/
├─ website/                 # this React SPA (this page)
├─ simulations/
│  ├─ pandapower/           # pandapower scripts & notebooks
│  ├─ gridlabd/             # GridLAB-D models (if used)
│  └─ exata/                # EXATA scenario configs & traffic profiles
├─ orchestration/           # optional HELICS or socket-bridge code
├─ results/                 # CSVs, JSONs, plots
├─ thesis/                  # LaTeX or markdown thesis source
└─ README.md
";

const QUICK_START: &[RichText] = &[
    &[
        Text("Clone the repo skeleton and open "),
        Code("website/"),
        Text(" to edit the front-end content."),
    ],
    &[
        Text("In "),
        Code("simulations/pandapower/"),
        Text(
            ", create a small topology: 1 feeder, 1 substation transformer, 10 loads. Build a \
             notebook that runs a few fault/contingency cases.",
        ),
    ],
    &[Text(
        "Build EXATA network scenarios that mirror the control topology (SCADA/RTU/agent links) \
         and measure latency under load/loss.",
    )],
    &[Text(
        "Implement a simple agent prototype (Python/ROS/async) that consumes measurements and \
         issues simulated control commands; measure latencies end-to-end.",
    )],
    &[Text("Collect metrics and run baseline vs agent-enabled experiments.")],
];

/// The thesis proposal, in display order.
pub static THESIS: Document = Document {
    header: Header {
        title: "Agentic AI — Thesis Project",
        tagline: "Posture: Defense",
    },
    sections: &[
        Section {
            title: "Thesis",
            intro: None,
            body: SectionBody::Paragraph(THESIS_STATEMENT),
            note: None,
        },
        Section {
            title: "Super-rough outline",
            intro: None,
            body: SectionBody::OrderedList(OUTLINE),
            note: None,
        },
        Section {
            title: "Planned simulations (co-simulation)",
            intro: Some(&[Text(
                "We'll use a co-simulation approach to study the interplay between electrical \
                 behavior and communication/control infrastructure. The high-level mapping below \
                 shows components and intended roles:",
            )]),
            body: SectionBody::TwoColumn {
                left: POWER_SYSTEM,
                right: COMMUNICATION,
            },
            note: Some(Note {
                text: &[Text(
                    "Note: pandapower and GridLAB-D are Python/C-based tools run locally or on \
                     compute nodes; EXATA is a separate network simulator — data exchange will \
                     be via files, sockets, or a co-simulation orchestrator (e.g., HELICS or \
                     custom bridge).",
                )],
                tone: NoteTone::Caption,
            }),
        },
        Section {
            title: "Example experiments & metrics",
            intro: None,
            body: SectionBody::UnorderedList(EXPERIMENTS),
            note: None,
        },
        Section {
            title: "Proposed solutions (what sims should produce)",
            intro: Some(&[Text("From the simulations we expect to produce:")]),
            body: SectionBody::UnorderedList(SOLUTIONS),
            note: None,
        },
        Section {
            title: "Repository layout (suggested)",
            intro: None,
            body: SectionBody::CodeBlock(REPOSITORY_LAYOUT),
            note: Some(Note {
                text: &[Text(
                    "Tip: Keep the simulations in Python notebooks (pandapower) with clearly \
                     documented inputs so reviewers can reproduce results.",
                )],
                tone: NoteTone::Tip,
            }),
        },
        Section {
            title: "How to start (quick steps)",
            intro: None,
            body: SectionBody::OrderedList(QUICK_START),
            note: None,
        },
    ],
    footer: Footer {
        lead: "If you'd like, I can:",
        items: &[
            &[Text("Create runnable pandapower notebooks for the starter topology.")],
            &[Text("Generate example EXATA scenario templates (text config skeletons).")],
            &[Text("Produce a LaTeX thesis skeleton or Markdown draft from this outline.")],
        ],
    },
};

/// The thesis document.
pub fn document() -> &'static Document {
    &THESIS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{plain_text, Inline};
    use pretty_assertions::assert_eq;

    #[test]
    fn sections_are_in_display_order() {
        assert_eq!(
            document().section_titles(),
            vec![
                "Thesis",
                "Super-rough outline",
                "Planned simulations (co-simulation)",
                "Example experiments & metrics",
                "Proposed solutions (what sims should produce)",
                "Repository layout (suggested)",
                "How to start (quick steps)",
            ]
        );
    }

    #[test]
    fn section_titles_are_unique() {
        let mut titles = document().section_titles();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), document().sections.len());
    }

    #[test]
    fn list_sections_have_literal_item_counts() {
        let doc = document();
        let count = |title: &str| doc.section(title).and_then(|s| s.body.item_count());

        assert_eq!(count("Super-rough outline"), Some(8));
        assert_eq!(count("Planned simulations (co-simulation)"), Some(4));
        assert_eq!(count("Example experiments & metrics"), Some(4));
        assert_eq!(count("Proposed solutions (what sims should produce)"), Some(5));
        assert_eq!(count("How to start (quick steps)"), Some(5));
        assert_eq!(count("Thesis"), None);
        assert_eq!(doc.footer.items.len(), 3);
    }

    #[test]
    fn columns_split_two_and_two() {
        let section = document()
            .section("Planned simulations (co-simulation)")
            .unwrap();

        match section.body {
            SectionBody::TwoColumn { left, right } => {
                assert_eq!(left.title, "Power-system modelling");
                assert_eq!(left.items.len(), 2);
                assert_eq!(right.title, "Communication & control simulation");
                assert_eq!(right.items.len(), 2);
            }
            other => panic!("expected two columns, got {:?}", other),
        }
    }

    #[test]
    fn no_section_body_is_empty() {
        for section in document().sections {
            assert!(!section.body.is_empty(), "{} has an empty body", section.title);
        }
    }

    #[test]
    fn header_and_first_outline_item() {
        let doc = document();
        assert_eq!(doc.header.title, "Agentic AI — Thesis Project");
        assert_eq!(doc.header.tagline, "Posture: Defense");

        match doc.section("Super-rough outline").unwrap().body {
            SectionBody::OrderedList(items) => {
                assert!(plain_text(items[0]).starts_with("Introduction & Motivation"));
            }
            other => panic!("expected ordered list, got {:?}", other),
        }
    }

    #[test]
    fn thesis_statement_is_emphasized() {
        match document().sections[0].body {
            SectionBody::Paragraph(runs) => {
                assert!(runs
                    .iter()
                    .any(|run| matches!(run, Inline::Strong(s) if s.ends_with("by 10%."))));
            }
            other => panic!("expected paragraph, got {:?}", other),
        }
    }

    #[test]
    fn repository_layout_is_verbatim() {
        let section = document().section("Repository layout (suggested)").unwrap();

        assert_eq!(section.body, SectionBody::CodeBlock(REPOSITORY_LAYOUT));
        assert!(REPOSITORY_LAYOUT.starts_with("/agentic-ai-thesis/\n├─ website/"));
        assert!(REPOSITORY_LAYOUT.contains("\n│  └─ exata/                # EXATA"));
        assert!(REPOSITORY_LAYOUT.ends_with("└─ README.md\n"));
        assert_eq!(REPOSITORY_LAYOUT.lines().count(), 10);
    }

    #[test]
    fn line_continuations_leave_single_spaces() {
        for section in document().sections {
            let text = match section.body {
                SectionBody::Paragraph(runs) => plain_text(runs),
                _ => continue,
            };
            assert!(!text.contains("  "), "double space in {}", section.title);
        }
    }
}
