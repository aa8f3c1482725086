//! Line-based console menu exercising the sorts, searches and the linked list
//!
//! Input and output are injected so the menu can be driven from tests.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::algorithm::sorting::{is_sorted, random_array, randomize, SortAlgorithm};
use crate::algorithm::searching::SearchAlgorithm;
use crate::data_structures::LinkedList;
use crate::{Error, Result};

const MAIN_MENU: &str = "\n\n main menu\
    \n ---------\
    \n 1. sorting and searching\
    \n 2. sorting stress test\
    \n 3. linked lists\
    \n 4. exit\
    \n> ";

const SORT_MENU: &str = "\n Which sorting algorithm do you want to use?\
    \n 1. Bubble sort\
    \n 2. Selection sort\
    \n 3. Insertion sort\
    \n 4. Shell sort\
    \n 5. Quicksort\
    \n 6. Merge sort\
    \n 7. Heap sort\
    \n> ";

const SEARCH_MENU: &str = "\n Which searching algorithm do you want to use?\
    \n 1. Linear search\
    \n 2. Binary search\
    \n> ";

/// Settings for the console demo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Number of elements in each random array
    pub array_size: usize,

    /// Random values are drawn from `1..=max_value`
    pub max_value: i64,

    /// Fixed seed for reproducible arrays, or `None` for entropy
    pub seed: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            array_size: 10,
            max_value: 100,
            seed: None,
        }
    }
}

impl DemoConfig {
    /// Reads the positional arguments `[array_size] [max_value] [seed]`
    ///
    /// Missing or unparsable values keep their defaults.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let defaults = DemoConfig::default();
        let mut args = args.into_iter();
        let array_size = args
            .next()
            .and_then(|arg| arg.parse().ok())
            .unwrap_or(defaults.array_size);
        let max_value = args
            .next()
            .and_then(|arg| arg.parse().ok())
            .filter(|max: &i64| *max > 0)
            .unwrap_or(defaults.max_value);
        let seed = args.next().and_then(|arg| arg.parse().ok());

        DemoConfig {
            array_size,
            max_value,
            seed,
        }
    }

    /// Creates the random generator for the random arrays
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Prints `text` and reads one trimmed line
    ///
    /// End of input is reported as an `UnexpectedEof` I/O error.
    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
        }
        Ok(line.trim().to_string())
    }

    fn prompt_parsed<T: FromStr>(&mut self, text: &str) -> Result<T> {
        let answer = self.prompt(text)?;
        answer.parse().map_err(|_| Error::InvalidChoice(answer))
    }

    fn choose_sort(&mut self) -> Result<SortAlgorithm> {
        let choice = self.prompt(SORT_MENU)?;
        choice
            .parse()
            .ok()
            .and_then(SortAlgorithm::from_choice)
            .ok_or(Error::InvalidChoice(choice))
    }

    fn choose_search(&mut self) -> Result<SearchAlgorithm> {
        let choice = self.prompt(SEARCH_MENU)?;
        choice
            .parse()
            .ok()
            .and_then(SearchAlgorithm::from_choice)
            .ok_or(Error::InvalidChoice(choice))
    }
}

fn is_end_of_input(err: &Error) -> bool {
    matches!(err, Error::Io(io_err) if io_err.kind() == io::ErrorKind::UnexpectedEof)
}

fn format_array(numbers: &[i64]) -> String {
    numbers
        .iter()
        .map(|number| number.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Runs the main menu until the user exits or the input ends
pub fn run<R, W>(config: &DemoConfig, input: R, output: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut console = Console { input, output };
    let mut rng = config.rng();

    loop {
        let outcome = match console.prompt(MAIN_MENU) {
            Ok(choice) => match choice.as_str() {
                "1" => sorting_and_searching(config, &mut console, &mut rng),
                "2" => stress_test(config, &mut console, &mut rng),
                "3" => linked_lists(&mut console),
                "4" => break,
                _ => Err(Error::InvalidChoice(choice.clone())),
            },
            Err(err) => Err(err),
        };

        match outcome {
            Ok(()) => {}
            Err(Error::InvalidChoice(choice)) => {
                debug!("rejected menu input {:?}", choice);
                write!(console.output, "\n Error: invalid choice.")?;
            }
            Err(err) if is_end_of_input(&err) => break,
            Err(err) => return Err(err),
        }
    }

    writeln!(console.output)?;
    Ok(())
}

fn sorting_and_searching<R, W, G>(
    config: &DemoConfig,
    console: &mut Console<R, W>,
    rng: &mut G,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    let mut numbers = random_array(config.array_size, config.max_value, rng);
    write!(console.output, "\n Unsorted array: {}", format_array(&numbers))?;

    let algorithm = console.choose_sort()?;
    debug!("sorting {} numbers with {}", numbers.len(), algorithm.name());
    algorithm.sort(&mut numbers);
    write!(console.output, "\n Sorted array: {}", format_array(&numbers))?;

    let value: i64 = console.prompt_parsed("\n What value are you looking for? ")?;
    let search = console.choose_search()?;
    match search.search(&numbers, &value) {
        Some(index) => write!(console.output, "\n The value is in element {}", index)?,
        None => write!(console.output, "\n Error: number not found.")?,
    }
    Ok(())
}

fn stress_test<R, W, G>(config: &DemoConfig, console: &mut Console<R, W>, rng: &mut G) -> Result<()>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    let repetitions: usize = console.prompt_parsed("\n Repetitions: ")?;
    let algorithm = console.choose_sort()?;

    let mut numbers = vec![0; config.array_size];
    for _ in 0..repetitions {
        randomize(&mut numbers, config.max_value, rng);
        algorithm.sort(&mut numbers);
        if !is_sorted(&numbers) {
            write!(console.output, "\n Error: the numbers did not sort successfully.")?;
            return Ok(());
        }
    }
    write!(console.output, "\n Sorted {} times successfully.", repetitions)?;
    Ok(())
}

fn linked_lists<R, W>(console: &mut Console<R, W>) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut list: LinkedList<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();

    write!(console.output, "\n list: ")?;
    list.print(&mut console.output)?;

    let value = console.prompt("\n What value are you looking for? ")?;
    match list.find(&value) {
        Some(index) => write!(console.output, "\n index: {}", index)?,
        None => write!(console.output, "\n \"{}\" is not in the list", value)?,
    }

    list.reverse();
    write!(console.output, "\n reversed: ")?;
    list.print(&mut console.output)?;
    Ok(())
}
