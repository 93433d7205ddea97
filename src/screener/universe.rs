//! Sector universe and scan scope.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Sector tag given to tickers entered by hand.
pub const MANUAL_SECTOR: &str = "Manual";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sector {
    pub name: String,
    pub symbols: Vec<String>,
}

/// Static grouping of tickers by sector, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorUniverse {
    sectors: Vec<Sector>,
}

/// Which tickers a pass should cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanScope {
    AllSectors,
    Sectors(Vec<String>),
    Manual(Vec<String>),
}

impl ScanScope {
    /// Manual ticker input takes priority over a sector selection; an empty
    /// selection means every sector.
    pub fn from_inputs(manual: &str, sectors: &[String]) -> Self {
        let tickers = parse_ticker_list(manual);
        if !tickers.is_empty() {
            ScanScope::Manual(tickers)
        } else if sectors.is_empty() {
            ScanScope::AllSectors
        } else {
            ScanScope::Sectors(sectors.to_vec())
        }
    }
}

/// One ticker to screen, tagged with its position in scan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanItem {
    pub index: usize,
    pub symbol: String,
    pub sector: String,
}

impl SectorUniverse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or extend) a sector.
    pub fn with_sector<S: Into<String>>(
        mut self,
        name: &str,
        symbols: impl IntoIterator<Item = S>,
    ) -> Self {
        let symbols: Vec<String> = symbols.into_iter().map(Into::into).collect();
        match self.sectors.iter_mut().find(|s| s.name == name) {
            Some(existing) => existing.symbols.extend(symbols),
            None => self.sectors.push(Sector {
                name: name.to_string(),
                symbols,
            }),
        }
        self
    }

    /// The Jakarta (IDX) universe: 10 sectors of large, mid and small caps.
    pub fn idx_default() -> Self {
        IDX_SECTORS
            .iter()
            .fold(Self::new(), |u, (name, symbols)| {
                u.with_sector(name, symbols.iter().copied())
            })
    }

    pub fn is_empty(&self) -> bool {
        self.sectors.iter().all(|s| s.symbols.is_empty())
    }

    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    pub fn sector_names(&self) -> Vec<&str> {
        self.sectors.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn symbols(&self, sector: &str) -> Option<&[String]> {
        self.sectors
            .iter()
            .find(|s| s.name == sector)
            .map(|s| s.symbols.as_slice())
    }

    /// Expand a scope into the ordered ticker list for a pass.
    ///
    /// A symbol listed in several selected sectors is scanned once, under
    /// the first sector that lists it.
    pub fn resolve(&self, scope: &ScanScope) -> Result<Vec<ScanItem>, ConfigError> {
        let pairs: Vec<(&str, &str)> = match scope {
            ScanScope::Manual(tickers) => tickers
                .iter()
                .map(|t| (t.as_str(), MANUAL_SECTOR))
                .collect(),
            ScanScope::AllSectors => {
                if self.is_empty() {
                    return Err(ConfigError::EmptyUniverse);
                }
                self.sectors
                    .iter()
                    .flat_map(|s| s.symbols.iter().map(move |t| (t.as_str(), s.name.as_str())))
                    .collect()
            }
            ScanScope::Sectors(names) => {
                if self.is_empty() {
                    return Err(ConfigError::EmptyUniverse);
                }
                let mut pairs = Vec::new();
                for name in names {
                    let symbols = self
                        .symbols(name)
                        .ok_or_else(|| ConfigError::UnknownSector(name.clone()))?;
                    pairs.extend(symbols.iter().map(|t| (t.as_str(), name.as_str())));
                }
                pairs
            }
        };

        let mut seen = HashSet::new();
        Ok(pairs
            .into_iter()
            .filter(|(symbol, _)| seen.insert(*symbol))
            .enumerate()
            .map(|(index, (symbol, sector))| ScanItem {
                index,
                symbol: symbol.to_string(),
                sector: sector.to_string(),
            })
            .collect())
    }
}

/// Split comma-separated ticker input: upper-cased, whitespace removed,
/// empty entries dropped.
pub fn parse_ticker_list(input: &str) -> Vec<String> {
    input
        .to_uppercase()
        .split(',')
        .map(|t| t.chars().filter(|c| !c.is_whitespace()).collect::<String>())
        .filter(|t| !t.is_empty())
        .collect()
}

const IDX_SECTORS: &[(&str, &[&str])] = &[
    (
        "Financials",
        &[
            "BBCA.JK", "BBRI.JK", "BMRI.JK", "BBNI.JK", "BRIS.JK", "BBTN.JK", "PNBN.JK", "BTPS.JK",
            "ARTO.JK", "BNGA.JK", "NISP.JK", "BJBR.JK", "BJTM.JK", "BFIN.JK", "TUGU.JK", "ADMF.JK",
            "AMAR.JK", "BBYB.JK", "BCIC.JK", "BNLI.JK", "PNBS.JK", "AGRO.JK", "MAYA.JK",
        ],
    ),
    (
        "Energy",
        &[
            "ADRO.JK", "PTBA.JK", "PGAS.JK", "MEDC.JK", "AKRA.JK", "ITMG.JK", "HRUM.JK", "BUMI.JK",
            "INDY.JK", "ELSA.JK", "DEWA.JK", "DOID.JK", "ENRG.JK", "ABMM.JK", "TOBA.JK", "RAJA.JK",
            "KKGI.JK", "MBSS.JK", "PSI.JK", "SGER.JK", "IATA.JK", "WINE.JK", "GTSI.JK",
        ],
    ),
    (
        "Basic Materials",
        &[
            "MDKA.JK", "ANTM.JK", "INCO.JK", "TINS.JK", "MBMA.JK", "NCKL.JK", "INTP.JK", "SMGR.JK",
            "BRPT.JK", "TPIA.JK", "ESSA.JK", "MDKI.JK", "IFSH.JK", "KRAS.JK", "LTLS.JK", "ZINC.JK",
            "DKFT.JK", "NIKL.JK", "TYRE.JK", "BRMS.JK", "UNNU.JK", "NICL.JK",
        ],
    ),
    (
        "Consumer Non-Cyclicals",
        &[
            "ICBP.JK", "INDF.JK", "MYOR.JK", "KLBF.JK", "UNVR.JK", "CPIN.JK", "JPFA.JK", "HMSP.JK",
            "GGRM.JK", "CMRY.JK", "SIDO.JK", "AMRT.JK", "MIDI.JK", "ROTI.JK", "STTP.JK", "CLEO.JK",
            "ULTJ.JK", "GOOD.JK", "WOOD.JK", "AISA.JK",
        ],
    ),
    (
        "Telecommunications",
        &[
            "TLKM.JK", "ISAT.JK", "EXCL.JK", "MTEL.JK", "FREN.JK", "TBIG.JK", "TOWR.JK", "CENT.JK",
            "SUPR.JK", "LINK.JK", "GHON.JK",
        ],
    ),
    (
        "Technology",
        &[
            "GOTO.JK", "EMTK.JK", "BUKA.JK", "BELI.JK", "WIRG.JK", "MTDL.JK", "MLPT.JK", "DMMX.JK",
            "GLVA.JK", "KIOS.JK", "UVCR.JK", "DIVA.JK", "NFCX.JK",
        ],
    ),
    (
        "Infrastructure",
        &[
            "JSMR.JK", "WIKA.JK", "PTPP.JK", "ADHI.JK", "META.JK", "CMNP.JK", "IPCC.JK", "IPC.JK",
            "WEGE.JK", "TOTL.JK", "NRCA.JK", "ACST.JK", "IDPR.JK", "POWR.JK", "KEEN.JK",
        ],
    ),
    (
        "Healthcare",
        &[
            "KLBF.JK", "MIKA.JK", "HEAL.JK", "SILO.JK", "SIDO.JK", "SAME.JK", "RDTX.JK", "PRDA.JK",
            "TSPC.JK", "KAEF.JK", "IRRA.JK", "PEHA.JK", "BMHS.JK",
        ],
    ),
    (
        "Properties",
        &[
            "CTRA.JK", "BSDE.JK", "PWON.JK", "SMRA.JK", "ASRI.JK", "LPKR.JK", "DMAS.JK", "KIJA.JK",
            "BEST.JK", "APLN.JK", "PANI.JK", "DILD.JK", "MKPI.JK", "RALS.JK", "LPCK.JK", "GWSA.JK",
            "MTLA.JK",
        ],
    ),
    (
        "Automotive & Heavy",
        &[
            "ASII.JK", "UNTR.JK", "HEXA.JK", "AUTO.JK", "DRMA.JK", "IMAS.JK", "SMSM.JK", "GJTL.JK",
            "MPMX.JK", "ALDO.JK",
        ],
    ),
];
