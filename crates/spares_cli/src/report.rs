use parts::part::PartDescriptor;
use spares_app::Bicycle;
use termtree::Tree;

pub fn build_spares_tree(assembly: &Bicycle) -> Tree<String> {
    let mut tree = Tree::new(format!("Spares, size: {}", assembly.size()));

    for spare in assembly.spares() {
        tree.leaves.push(Tree::new(format_part(spare)));
    }

    tree
}

pub fn build_parts_tree(assembly: &Bicycle) -> Tree<String> {
    let mut tree = Tree::new(format!("Parts, size: {}", assembly.size()));

    for part in assembly.parts() {
        let label = match part.needs_spare() {
            true => format!("{} (needs spare)", format_part(part)),
            false => format_part(part),
        };
        tree.leaves.push(Tree::new(label));
    }

    tree
}

fn format_part<P: PartDescriptor>(part: &P) -> String {
    format!("{}: '{}'", part.name(), part.description())
}

#[cfg(test)]
mod report_tests {
    use indoc::indoc;
    use parts::factory::PartsFactory;
    use parts::presets::Preset;
    use spares_app::Bicycle;

    use crate::report::{build_parts_tree, build_spares_tree};

    fn mountain_bike() -> Bicycle {
        Bicycle::new("L".to_string(), PartsFactory::build(Preset::Mountain.configs()).unwrap())
    }

    #[test]
    fn spares_tree() {
        // when
        let tree = build_spares_tree(&mountain_bike());

        // then
        assert_eq!(tree.to_string(), indoc! {"
            Spares, size: L
            ├── chain: '10-speed'
            ├── tire_size: '2.1'
            └── rear_shock: 'Fox'
        "});
    }

    #[test]
    fn parts_tree() {
        // when
        let tree = build_parts_tree(&mountain_bike());

        // then
        assert_eq!(tree.to_string(), indoc! {"
            Parts, size: L
            ├── chain: '10-speed' (needs spare)
            ├── tire_size: '2.1' (needs spare)
            ├── front_shock: 'Manitou'
            └── rear_shock: 'Fox' (needs spare)
        "});
    }
}
