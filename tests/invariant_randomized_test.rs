use conjugo::{BlockContent, Conjugation, ConjugationConverter};

#[derive(Debug, Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn next_bool(&mut self) -> bool {
        (self.next_u64() >> 33) & 1 == 1
    }

    fn below(&mut self, n: usize) -> usize {
        ((self.next_u64() >> 33) % n as u64) as usize
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len())]
    }
}

const MOODS: &[&str] = &[
    "Indicatif",
    "Subjonctif",
    "Conditionnel",
    "Impératif <span>(?)</span>",
    "Participe &lt;em&gt;passé&lt;/em&gt;",
    "Infinitif <!-- mode\n suivant -->",
];
const TENSES: &[&str] = &[
    "Présent",
    "Imparfait",
    "Passé <i>simple</i>",
    "  Futur  ",
    "",
    "Futur <!-- pub\n slot --> antérieur",
    "<span title=\"temps\ncomposé\">Plus-que-parfait</span>",
];
const FORMS: &[&str] = &[
    "je suis",
    "<b>tu</b> es",
    "  il   est ",
    "&lt;nous&gt; sommes",
    " ",
    "",
    "vous <span class=\"x\">êtes</span>",
    "je<!-- pub\n slot --> suis",
    "<span title=\"a\nb\">tu</span> es",
];

#[derive(Debug, Default)]
struct Expected {
    headings: usize,
    blocks_before_heading: bool,
    blocks: usize,
}

fn random_container(rng: &mut Lcg, expected: &mut Expected, html: &mut String) {
    let class = rng.pick(&["tempstab", "bloc"]);
    html.push_str(&format!("<div class=\"{class}\">"));
    if rng.next_bool() {
        html.push_str(&format!(
            "<h3 class=\"tempsheader\">{}</h3>",
            rng.pick(TENSES)
        ));
    }
    if rng.below(5) > 0 {
        expected.blocks += 1;
        html.push_str("<div class=\"tempscorps\">");
        let len = rng.below(5);
        if rng.next_bool() {
            html.push_str("<table>");
            for _ in 0..len {
                html.push_str("<tr>");
                for _ in 0..2 {
                    html.push_str(&format!("<td>{}</td>", rng.pick(FORMS)));
                }
                html.push_str("</tr>");
            }
            html.push_str("</table>");
        } else {
            for i in 0..len {
                if i > 0 {
                    html.push_str(rng.pick(&["<br>", "<br/>", "<br />"]));
                }
                html.push_str(rng.pick(FORMS));
            }
        }
        html.push_str("</div>");
    }
    html.push_str("</div>\n");
}

fn random_page(rng: &mut Lcg) -> (String, Expected) {
    let mut expected = Expected::default();
    let mut html = String::from("<html><body><div id=\"conjugaison\">\n");
    for _ in 0..rng.below(12) {
        match rng.below(4) {
            0 => {
                expected.headings += 1;
                html.push_str(&format!("<h2 class=\"mode\">{}</h2>\n", rng.pick(MOODS)));
            }
            1 => html.push_str("<p class=\"pub\">Publicité</p>\n"),
            _ => {
                if expected.headings == 0 {
                    expected.blocks_before_heading = true;
                }
                random_container(rng, &mut expected, &mut html);
            }
        }
    }
    html.push_str("</div></body></html>");
    (html, expected)
}

fn all_strings(result: &Conjugation) -> Vec<&str> {
    let mut out = Vec::new();
    for section in &result.data {
        out.push(section.root.as_str());
        for block in &section.children {
            out.push(block.title.as_str());
            out.extend(block.content.texts());
        }
    }
    out
}

#[test]
fn randomized_extraction_invariants() {
    let mut rng = Lcg::new(0xC0A1_2026_1017);
    let converter = ConjugationConverter::with_defaults();

    for i in 0..64 {
        let (html, expected) = random_page(&mut rng);
        let result = converter
            .convert(&html, Some("être"))
            .unwrap_or_else(|e| panic!("iteration {i}: extraction failed: {e}"));

        let expected_sections = expected.headings + usize::from(expected.blocks_before_heading);
        assert_eq!(result.data.len(), expected_sections, "iteration {i}: {html}");
        assert_eq!(result.blocks().count(), expected.blocks, "iteration {i}: {html}");

        let defaults = result.data.iter().filter(|s| s.root == "Default").count();
        assert_eq!(defaults, usize::from(expected.blocks_before_heading), "iteration {i}");
        if expected.blocks_before_heading {
            assert_eq!(result.data[0].root, "Default", "iteration {i}");
        }

        for text in all_strings(&result) {
            assert!(
                !text.contains('<') && !text.contains('>'),
                "iteration {i}: markup left in {text:?}"
            );
        }

        for block in result.blocks() {
            match &block.content {
                BlockContent::Table { rows } => {
                    for row in rows {
                        assert!(row.iter().any(|c| !c.is_empty()), "iteration {i}: empty row");
                    }
                }
                BlockContent::Lines { data } => {
                    for line in data {
                        assert!(!line.is_empty(), "iteration {i}: empty line");
                        assert_eq!(line.trim(), line, "iteration {i}");
                        assert!(!line.contains("  "), "iteration {i}: {line:?}");
                    }
                }
            }
        }

        let again = converter.convert(&html, Some("être")).expect("second run");
        assert_eq!(result, again, "iteration {i}: extraction is not repeatable");
    }
}
