use semverx::{Channel, ChannelVersion, Graph, Node, Vote};

fn node(id: &str, version: &str, artifact_score: f64, votes: Vec<Vote>) -> Node {
    Node::new(id, ChannelVersion::parse(version), artifact_score, votes)
}

#[cfg(test)]
mod channel_version_tests {
    use super::*;

    #[test]
    fn test_channel_ranks_weight() {
        let stable = ChannelVersion::parse("2.0.0-stable").semver_weight();
        let lts = ChannelVersion::parse("2.0.0-lts").semver_weight();
        let legacy = ChannelVersion::parse("2.0.0-legacy").semver_weight();
        let other = ChannelVersion::parse("2.0.0-beta").semver_weight();
        let experimental = ChannelVersion::parse("2.0.0-experimental").semver_weight();

        assert_eq!(stable, lts);
        assert!(stable > legacy && legacy > other && other > experimental);
    }

    #[test]
    fn test_missing_suffix_is_stable() {
        assert_eq!(ChannelVersion::parse("4.2.0").channel, Channel::Stable);
    }
}

#[cfg(test)]
mod graph_tests {
    use super::*;

    fn chain() -> Graph {
        let mut graph = Graph::new();
        graph.add_node(node("root", "1.0.0", 0.8, vec![Vote::Yes]));
        graph.add_node(node("mid-exp", "3.0.0-experimental", 0.6, vec![Vote::Nil]));
        graph.add_node(node("mid-stable", "2.0.0-stable", 0.9, vec![Vote::Yes, Vote::Yes]));
        graph.add_node(node("leaf", "1.1.0-lts", 0.7, vec![]));
        graph.add_edge("root", "mid-exp");
        graph.add_edge("root", "mid-stable");
        graph.add_edge("mid-stable", "leaf");
        graph
    }

    #[test]
    fn test_walks_to_leaf() {
        assert_eq!(chain().resolve_best_path("root"), vec!["root", "mid-stable", "leaf"]);
    }

    #[test]
    fn test_path_from_inner_node() {
        assert_eq!(chain().resolve_best_path("mid-stable"), vec!["mid-stable", "leaf"]);
        assert_eq!(chain().resolve_best_path("leaf"), vec!["leaf"]);
    }

    #[test]
    fn test_self_loop_terminates() {
        let mut graph = Graph::new();
        graph.add_node(node("solo", "1.0.0", 0.5, vec![]));
        graph.add_edge("solo", "solo");

        assert_eq!(graph.resolve_best_path("solo"), vec!["solo"]);
    }

    #[test]
    fn test_replacing_node_changes_choice() {
        let mut graph = chain();
        graph.add_node(node("mid-exp", "3.0.0-stable", 1.0, vec![Vote::Yes, Vote::Yes]));

        assert_eq!(graph.resolve_best_path("root"), vec!["root", "mid-exp"]);
    }
}
