use crate::aa::{AAFramework, LabelType};

/// Computes the strongly connected components of the attack graph of an AF.
///
/// Each component is a sorted vector of argument ids.
/// The components are emitted in reverse topological order of the condensation
/// of the attack graph (see [`AAFramework::strongly_connected_components`]).
pub fn strongly_connected_components<T>(af: &AAFramework<T>) -> Vec<Vec<usize>>
where
    T: LabelType,
{
    let n_ids = af.max_argument_id().map_or(0, |m| m + 1);
    let successors = (0..n_ids)
        .map(|id| {
            if af.argument_set().has_argument_with_id(id) {
                af.attacked_ids_from(id).collect()
            } else {
                vec![]
            }
        })
        .collect::<Vec<Vec<usize>>>();
    let mut indices: Vec<Option<usize>> = vec![None; n_ids];
    let mut lowlinks = vec![0; n_ids];
    let mut on_stack = vec![false; n_ids];
    let mut stack = Vec::new();
    let mut next_index = 0;
    let mut components = Vec::new();
    for arg in af.argument_set().iter() {
        if indices[arg.id()].is_some() {
            continue;
        }
        // Tarjan's algorithm, with an explicit stack of (node, next successor) frames.
        let mut frames: Vec<(usize, usize)> = vec![(arg.id(), 0)];
        while let Some(frame) = frames.last_mut() {
            let v = frame.0;
            if frame.1 == 0 {
                indices[v] = Some(next_index);
                lowlinks[v] = next_index;
                next_index += 1;
                stack.push(v);
                on_stack[v] = true;
            }
            if frame.1 < successors[v].len() {
                let w = successors[v][frame.1];
                frame.1 += 1;
                match indices[w] {
                    None => frames.push((w, 0)),
                    Some(w_index) => {
                        if on_stack[w] {
                            lowlinks[v] = lowlinks[v].min(w_index);
                        }
                    }
                }
            } else {
                frames.pop();
                if let Some(parent) = frames.last() {
                    lowlinks[parent.0] = lowlinks[parent.0].min(lowlinks[v]);
                }
                if Some(lowlinks[v]) == indices[v] {
                    let mut component = Vec::new();
                    while let Some(w) = stack.pop() {
                        on_stack[w] = false;
                        component.push(w);
                        if w == v {
                            break;
                        }
                    }
                    component.sort_unstable();
                    components.push(component);
                }
            }
        }
    }
    components
}
