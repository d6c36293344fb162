//! Main commands enum and primary subcommands.
//!
//! This module defines the available commands for the CLI tool.

use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

use dqsus_core::{Disease, MappingLanguage, ThemedTable};

/// Available commands for the SINAN dataset tool.
#[derive(Subcommand)]
pub enum Commands {
    /// List the years a disease has published datasets for
    Years {
        /// Disease to query (DENG, ZIKA or CHIK, full names accepted)
        #[arg(short, long, default_value = "dengue")]
        disease: Disease,
    },

    /// Download dataset files into the raw cache
    Fetch {
        /// Disease to fetch datasets for
        #[arg(short, long, default_value = "dengue")]
        disease: Disease,
        /// Years to fetch; every available year when omitted
        #[arg(short, long, num_args = 1.., value_name = "YEAR")]
        years: Vec<u16>,
        /// Re-download files already in the cache
        #[arg(long)]
        force: bool,
    },

    /// Fetch (cache-aware) and stage dataset files into the database
    Ingest {
        /// Disease to ingest datasets for
        #[arg(short, long, default_value = "dengue")]
        disease: Disease,
        /// Years to ingest; every available year when omitted
        #[arg(short, long, num_args = 1.., value_name = "YEAR")]
        years: Vec<u16>,
        /// Re-download cached files before staging
        #[arg(long)]
        refresh: bool,
    },

    /// Rename staged columns and rebuild the themed tables
    Transform {
        /// Column-name language for the rename
        #[arg(long, default_value = "english")]
        language: MappingLanguage,
    },

    /// Run the pipeline and print a cleaned preview of a themed table
    Show {
        /// Themed table to show
        table: ThemedTable,
        /// Maximum rows to load (0 loads everything)
        #[arg(short, long, default_value = "10")]
        limit: u64,
        /// Disease to run the pipeline for
        #[arg(short, long, default_value = "dengue")]
        disease: Disease,
        /// Years to include; every available year when omitted
        #[arg(short, long, num_args = 1.., value_name = "YEAR")]
        years: Vec<u16>,
        /// Column-name language
        #[arg(long, default_value = "english")]
        language: MappingLanguage,
        /// Re-download cached files
        #[arg(long)]
        refresh: bool,
    },

    /// Run the pipeline and export a themed table to a file
    Export {
        /// Themed table to export
        table: ThemedTable,
        /// Destination file
        #[arg(short, long)]
        output: PathBuf,
        /// Output format
        #[arg(short, long, default_value = "csv")]
        format: ExportFormat,
        /// Maximum rows to export (0 exports everything)
        #[arg(short, long, default_value = "0")]
        limit: u64,
        /// Disease to run the pipeline for
        #[arg(short, long, default_value = "dengue")]
        disease: Disease,
        /// Years to include; every available year when omitted
        #[arg(short, long, num_args = 1.., value_name = "YEAR")]
        years: Vec<u16>,
        /// Column-name language
        #[arg(long, default_value = "english")]
        language: MappingLanguage,
        /// Re-download cached files
        #[arg(long)]
        refresh: bool,
    },

    /// Run the pipeline and validate a themed table against its builtin schema
    Validate {
        /// Themed table to validate
        table: ThemedTable,
        /// Maximum rows to check (0 checks everything)
        #[arg(short, long, default_value = "0")]
        limit: u64,
        /// Disease to run the pipeline for
        #[arg(short, long, default_value = "dengue")]
        disease: Disease,
        /// Years to include; every available year when omitted
        #[arg(short, long, num_args = 1.., value_name = "YEAR")]
        years: Vec<u16>,
        /// Column-name language
        #[arg(long, default_value = "english")]
        language: MappingLanguage,
        /// Re-download cached files
        #[arg(long)]
        refresh: bool,
    },

    /// Show resolved paths for all dqsus directories
    Paths,
}

/// Output formats for the export command.
#[derive(ValueEnum, Copy, Clone, Debug)]
pub enum ExportFormat {
    /// Comma-separated values with a header row.
    Csv,
    /// A JSON array of row objects.
    Json,
}
