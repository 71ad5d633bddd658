//! Unit tests for the `tilepath` binary's argument parsing, rendering and
//! batch formats.

#[cfg(test)]
mod args {
    use clap::Parser;

    use tp_core::Coord;

    use crate::args::{Cli, Command};

    #[test]
    fn route_arguments() {
        let cli = Cli::try_parse_from([
            "tilepath", "route", "--map", "m.json", "--from", "0,0", "--to", "(3, 4)", "--max-expanded", "50",
        ])
        .unwrap();
        let Command::Route(args) = cli.command else { panic!("expected route") };
        assert_eq!(args.from, Coord::new(0, 0));
        assert_eq!(args.to, Coord::new(3, 4));
        assert_eq!(args.network.max_expanded, Some(50));
        assert_eq!(args.network.ferries.to_str(), Some("ferry.json"));
        assert_eq!(args.network.search_config().max_expanded, Some(50));
    }

    #[test]
    fn negative_coordinates_are_values() {
        let cli = Cli::try_parse_from(["tilepath", "route", "--from", "-1,0", "--to", "2,2"]).unwrap();
        let Command::Route(args) = cli.command else { panic!("expected route") };
        assert_eq!(args.from, Coord::new(-1, 0));
    }

    #[test]
    fn bad_coordinate_rejected() {
        assert!(Cli::try_parse_from(["tilepath", "route", "--from", "zero", "--to", "2,2"]).is_err());
    }

    #[test]
    fn json_and_draw_conflict() {
        let r = Cli::try_parse_from(["tilepath", "route", "--from", "0,0", "--to", "1,1", "--json", "--draw"]);
        assert!(r.is_err());
    }

    #[test]
    fn verbosity_counts() {
        let cli = Cli::try_parse_from(["tilepath", "classify", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}

#[cfg(test)]
mod render {
    use tp_core::{Coord, Ferry, Grid};
    use tp_route::find_path;

    use crate::render::{counts_table, draw_map, path_line, terrain_counts};

    fn grid() -> Grid {
        Grid::from_rows([
            ["plains", "sea", "plains"],
            ["mountain", "void", "plains"],
        ])
        .unwrap()
    }

    #[test]
    fn path_line_format() {
        let path = [Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 1)];
        assert_eq!(path_line(&path), "(0,0) → (1,1) → (2,1)");
        assert_eq!(path_line(&[Coord::new(4, 2)]), "(4,2)");
    }

    #[test]
    fn terrain_only() {
        assert_eq!(draw_map(&grid(), None), ".~.\n^#.\n");
    }

    #[test]
    fn route_overlay() {
        let g = grid();
        let route = find_path(&g, &[], Coord::new(0, 0), Coord::new(2, 1)).unwrap();
        let drawn = draw_map(&g, Some(&route));
        let lines: Vec<&str> = drawn.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('S'));
        assert!(lines[1].ends_with('E'));
        assert_eq!(drawn.matches('*').count(), route.path.len() - 2);
    }

    #[test]
    fn ferry_route_marks_endpoints_only() {
        let g = grid();
        let route = find_path(&g, &[Ferry::new((0, 0), (2, 1), 1)], Coord::new(0, 0), Coord::new(2, 1)).unwrap();
        assert_eq!(draw_map(&g, Some(&route)), "S~.\n^#E\n");
    }

    #[test]
    fn empty_grid_draws_nothing() {
        assert_eq!(draw_map(&Grid::empty(), None), "");
    }

    #[test]
    fn counts() {
        let counts: Vec<usize> = terrain_counts(&grid()).iter().map(|&(_, n)| n).collect();
        // void, mountain, sea, plain
        assert_eq!(counts, vec![1, 1, 1, 3]);
        let table = counts_table(&grid());
        assert!(table.contains("impassable"));
        assert_eq!(table.lines().count(), 4);
    }
}

#[cfg(test)]
mod batch {
    use std::io::Cursor;

    use tp_core::{Coord, Grid};
    use tp_route::{route_many, DijkstraRouter};

    use crate::batch::{read_pairs, write_results};

    #[test]
    fn reads_pairs() {
        let pairs = read_pairs(Cursor::new("from_x,from_y,to_x,to_y\n0, 0, 2, 1\n-1,0,0,0\n")).unwrap();
        assert_eq!(
            pairs,
            vec![(Coord::new(0, 0), Coord::new(2, 1)), (Coord::new(-1, 0), Coord::new(0, 0))]
        );
    }

    #[test]
    fn bad_row_is_an_error() {
        assert!(read_pairs(Cursor::new("from_x,from_y,to_x,to_y\n0,0,x,1\n")).is_err());
    }

    #[test]
    fn writes_results_in_order() {
        let grid = Grid::from_rows([["plains"; 3]; 2]).unwrap();
        let pairs = vec![(Coord::new(0, 0), Coord::new(2, 1)), (Coord::new(5, 5), Coord::new(0, 0))];
        let results = route_many(&DijkstraRouter::default(), &grid, &[], &pairs);

        let mut buf = Vec::new();
        write_results(&mut buf, &pairs, &results).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "from_x,from_y,to_x,to_y,cost,steps,error");
        assert_eq!(lines[1], "0,0,2,1,2,2,");
        // The error text contains a comma, so the field is quoted.
        assert_eq!(lines[2], "5,5,0,0,,,\"start (5,5) is outside the 3x2 grid\"");
    }
}
