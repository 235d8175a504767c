/*
 * SPDX-FileCopyrightText: 2025 The pajek-hig developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use dsi_progress_logger::no_logging;
use pajek_hig::prelude::*;

fn to_hig(input: &str, options: GraphOptions) -> Result<String> {
    let mut output = Vec::new();
    convert(input.as_bytes(), &mut output, "test.net", options, no_logging![])?;
    Ok(String::from_utf8(output)?)
}

/// Returns the link lines following each section marker, in order.
fn sections(hig: &str) -> Vec<(String, Vec<String>)> {
    let mut result: Vec<(String, Vec<String>)> = vec![];
    for line in hig.lines() {
        if line == "/Edges" || line == "/Arcs" {
            result.push((line.to_owned(), vec![]));
        } else if line.contains("> ") {
            result
                .last_mut()
                .expect("link line outside of a section")
                .1
                .push(line.to_owned());
        }
    }
    result
}

const SMALL: &str = "*vertices 3\n*edges\n1 2\n2 3\n1 1\n";

#[test]
fn test_small_weighted() -> Result<()> {
    let hig = to_hig(SMALL, GraphOptions::default())?;
    assert_eq!(
        hig,
        "# Converted from test.net\n\
         /Graph weighted:1 normalize:0\n\n\
         /Nodes 3 1\n\n\
         \n/Edges\n\
         1> 2:1\n\
         2> 3:1\n\
         \n/Arcs\n\
         1> 1:1\n"
    );
    Ok(())
}

#[test]
fn test_small_unweighted() -> Result<()> {
    let hig = to_hig(SMALL, GraphOptions::default().weighted(false))?;
    assert!(hig.contains("/Graph weighted:0 normalize:0\n"));
    assert_eq!(
        sections(&hig),
        vec![
            ("/Edges".to_owned(), vec!["1> 2".to_owned(), "2> 3".to_owned()]),
            ("/Arcs".to_owned(), vec!["1> 1".to_owned()]),
        ]
    );
    Ok(())
}

#[test]
fn test_unweighted_has_no_weights() -> Result<()> {
    let input = "% weighted input\n*Vertices 4\n*Arcs\n1 2 0.5\n1 3 2\n4 4 7\n*Edges\n2 3 1.5\n3 3 9\n*Arcslist\n4 1 2 3\n";
    let hig = to_hig(input, GraphOptions::default().weighted(false))?;
    for line in hig.lines().filter(|line| !line.starts_with('/')) {
        assert!(!line.contains(':'), "weight in line {:?}", line);
    }
    Ok(())
}

#[test]
fn test_node_count_is_verbatim() -> Result<()> {
    // ids beyond the declared count are not checked
    let hig = to_hig("*Vertices 1234567\n*arcs\n1 99999999\n", GraphOptions::default())?;
    assert!(hig.contains("\n/Nodes 1234567 1\n\n"));
    assert!(hig.contains("\n1> 99999999:1\n"));
    Ok(())
}

#[test]
fn test_links_keep_their_section() -> Result<()> {
    let input = "*Vertices 5\n*Arcs\n1 2 3\n2 1\n*Edges\n3 4 2\n4 5\n3 5\n";
    let hig = to_hig(input, GraphOptions::default())?;
    assert_eq!(
        sections(&hig),
        vec![
            (
                "/Arcs".to_owned(),
                vec!["1> 2:3".to_owned(), "2> 1:1".to_owned()]
            ),
            (
                "/Edges".to_owned(),
                vec!["3> 4:2 5:1".to_owned(), "4> 5:1".to_owned()]
            ),
        ]
    );
    Ok(())
}

#[test]
fn test_self_loops_of_edges_become_arcs() -> Result<()> {
    let input = "*Vertices 3\n*Edges\n2 2 4\n1 2\n3 3\n2 2 5\n";
    let hig = to_hig(input, GraphOptions::default())?;
    let sections = sections(&hig);
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0], ("/Edges".to_owned(), vec!["1> 2:1".to_owned()]));
    // one self-loop per node, the last one wins
    assert_eq!(
        sections[1],
        (
            "/Arcs".to_owned(),
            vec!["2> 2:5".to_owned(), "3> 3:1".to_owned()]
        )
    );
    Ok(())
}

#[test]
fn test_self_loop_is_textual() -> Result<()> {
    // "01" and "1" are different tokens, hence not a self-loop
    let hig = to_hig("*Vertices 1\n*Edges\n1 01\n", GraphOptions::default())?;
    assert_eq!(
        sections(&hig),
        vec![("/Edges".to_owned(), vec!["1> 01:1".to_owned()])]
    );
    Ok(())
}

#[test]
fn test_duplicates() -> Result<()> {
    let input = "*Vertices 3\n*Edges\n1 2 5\n1 3 1\n1 2 9\n";

    let hig = to_hig(input, GraphOptions::default())?;
    assert_eq!(
        sections(&hig),
        vec![("/Edges".to_owned(), vec!["1> 2:5 3:1 2:9".to_owned()])]
    );

    let hig = to_hig(input, GraphOptions::default().resolve_duplicates(true))?;
    assert_eq!(
        sections(&hig),
        vec![("/Edges".to_owned(), vec!["1> 2:9 3:1".to_owned()])]
    );
    Ok(())
}

#[test]
fn test_duplicates_are_resolved_within_a_section() -> Result<()> {
    let input = "*Vertices 2\n*Edges\n1 2 5\n*Edges\n1 2 9\n";
    let hig = to_hig(input, GraphOptions::default().resolve_duplicates(true))?;
    assert_eq!(
        sections(&hig),
        vec![
            ("/Edges".to_owned(), vec!["1> 2:5".to_owned()]),
            ("/Edges".to_owned(), vec!["1> 2:9".to_owned()]),
        ]
    );
    Ok(())
}

#[test]
fn test_split_sections_flush_same_links() -> Result<()> {
    let single = to_hig(
        "*Vertices 4\n*Edges\n1 2\n3 4\n1 3\n",
        GraphOptions::default(),
    )?;
    let split = to_hig(
        "*Vertices 4\n*Edges\n1 2\n3 4\n*Edges\n1 3\n",
        GraphOptions::default(),
    )?;

    let flatten = |hig: &str| {
        let mut links = sections(hig)
            .into_iter()
            .flat_map(|(_, lines)| lines)
            .flat_map(|line| {
                let (src, dsts) = line.split_once("> ").unwrap();
                dsts.split(' ')
                    .map(|dst| format!("{}-{}", src, dst))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();
        links.sort();
        links
    };
    assert_eq!(flatten(&single), flatten(&split));
    assert_eq!(sections(&split).len(), 2);
    Ok(())
}

#[test]
fn test_list_sections() -> Result<()> {
    let input = "*Vertices 4\n*Edgeslist\n1 2 3\n2 4\n*Arcslist\n4  1\t2\n";
    let hig = to_hig(input, GraphOptions::default())?;
    assert_eq!(
        sections(&hig),
        vec![
            (
                "/Edges".to_owned(),
                vec!["1> 2:1 3:1".to_owned(), "2> 4:1".to_owned()]
            ),
            ("/Arcs".to_owned(), vec!["4> 1:1 2:1".to_owned()]),
        ]
    );

    let hig = to_hig(input, GraphOptions::default().weighted(false))?;
    assert!(hig.ends_with("\n/Arcs\n4> 1 2\n"));
    Ok(())
}

#[test]
fn test_comments_and_case() -> Result<()> {
    let input = "% header comment\n\n  *VERTICES 2 \"labels\"\n 1 \"a\"\n 2 \"b\"\n%mid\n*EdGeS\n\n 1   2   0.25 \n";
    let hig = to_hig(input, GraphOptions::default().normalize(true))?;
    assert!(hig.contains("/Graph weighted:1 normalize:1\n"));
    assert!(hig.contains("/Nodes 2 1\n"));
    assert_eq!(
        sections(&hig),
        vec![("/Edges".to_owned(), vec!["1> 2:0.25".to_owned()])]
    );
    Ok(())
}

#[test]
fn test_empty_sections() -> Result<()> {
    let hig = to_hig("*Vertices 0\n*Edges\n*Arcs\n", GraphOptions::default())?;
    assert!(hig.ends_with("/Nodes 0 1\n\n\n/Edges\n\n/Arcs\n"));
    Ok(())
}

#[test]
fn test_stats() -> Result<()> {
    let mut output = Vec::new();
    let stats = convert(
        "*Vertices 3\n*Edges\n1 2\n1 1\n*Arcslist\n3 1 2\n".as_bytes(),
        &mut output,
        "test.net",
        GraphOptions::default(),
        no_logging![],
    )?;
    assert_eq!(
        stats,
        ConversionStats {
            lines: 6,
            num_nodes: 3,
            sections: 3,
            links: 4,
            deferred_loops: 1,
        }
    );
    Ok(())
}

fn format_error(input: &str) -> Option<usize> {
    match to_hig(input, GraphOptions::default())
        .unwrap_err()
        .downcast::<ConvertError>()
    {
        Ok(ConvertError::Format { line, .. }) => Some(line),
        _ => None,
    }
}

#[test]
fn test_format_errors() {
    // a single id in an edge line
    assert_eq!(format_error("*vertices 3\n*edges\n1\n"), Some(3));
    // too many tokens
    assert_eq!(format_error("*vertices 3\n*arcs\n1 2 3 4\n"), Some(3));
    // missing or invalid vertex count
    assert_eq!(format_error("*vertices\n"), Some(1));
    assert_eq!(format_error("*vertices many\n"), Some(1));
    // section order
    assert_eq!(format_error("% c\n*edges\n"), Some(2));
    assert_eq!(format_error("*vertices 1\n*vertices 1\n"), Some(2));
    // unsupported section
    assert_eq!(format_error("*vertices 1\n*partition p\n"), Some(2));
    assert_eq!(format_error("*vertices 1\n*\n"), Some(2));
    // data before any header
    assert_eq!(format_error("1 2\n"), Some(1));
    // non-numeric source
    assert_eq!(format_error("*vertices 1\n*edgeslist\nx 1\n"), Some(3));
}

#[test]
fn test_no_output_after_error() -> Result<()> {
    let mut output = Vec::new();
    let result = convert(
        "*vertices 3\n*edges\n1 2\n1\n2 3\n".as_bytes(),
        &mut output,
        "test.net",
        GraphOptions::default(),
        no_logging![],
    );
    assert!(result.is_err());
    let hig = String::from_utf8(output)?;
    assert!(hig.ends_with("\n/Edges\n"));
    assert!(!hig.contains("1> "));
    Ok(())
}
